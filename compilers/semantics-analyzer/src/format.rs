use semantics_protocol::AnalysisRecord;

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn or_unknown(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("unknown")
}

/// Human-readable multi-line report, one field per line in record order.
pub fn format_analysis(analysis: &AnalysisRecord) -> String {
    let mut lines = vec!["Semantic Analysis".to_string(), "=".repeat(18)];

    lines.push(format!("Sentence: {}", analysis.sentence));
    lines.push(format!("Type: {}", analysis.sentence_type));
    lines.push(format!("Polarity: {}", analysis.polarity));
    lines.push(format!("Modality: {}", list_or_none(&analysis.modality)));
    lines.push(format!("Tense: {}", analysis.tense));
    lines.push(format!("Temporal cues: {}", list_or_none(&analysis.temporal_cues)));
    lines.push(format!("Quantifiers: {}", list_or_none(&analysis.quantifiers)));
    lines.push("Predicate/Arguments:".to_string());
    lines.push(format!("  Main verb: {}", or_unknown(analysis.main_predicate.as_deref())));
    lines.push(format!("  Subject: {}", or_unknown(analysis.subject.as_deref())));
    lines.push(format!("  Object: {}", or_unknown(analysis.object.as_deref())));
    lines.push(format!("Topics: {}", list_or_none(&analysis.topics)));
    lines.push(format!(
        "Sentiment: {} (score {})",
        analysis.sentiment.label, analysis.sentiment.score
    ));
    lines.push("\nWord influence:".to_string());

    for item in &analysis.word_influence {
        // `{:?}` keeps the decimal point on whole weights ("1.0")
        lines.push(format!(
            "  - {} ({}): {} (weight {:?})",
            item.token, item.pos_guess, item.influence_type, item.weight
        ));
    }

    lines.join("\n")
}
