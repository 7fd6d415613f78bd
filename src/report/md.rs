use crate::decision::Recommendation;
use crate::types::report::{Evaluation, Notice};

fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

pub fn to_markdown(evaluation: &Evaluation) -> String {
    let metrics = &evaluation.metrics;
    let analysis = &evaluation.analysis;
    let buy_wins = analysis.expected_utility_buy > analysis.expected_utility_not_buy;
    let not_buy_wins = analysis.expected_utility_not_buy > analysis.expected_utility_buy;

    let mut output = String::new();
    output.push_str(&format!("# Analysis: {}\n\n", evaluation.input.item_name));

    output.push_str("## Scenario Values\n\n");
    output.push_str(&format!(
        "- Buy+Useful: {:.2}\n- Buy+Not: {:.2}\n- NoBuy+Need: {:.2}\n- NoBuy+NoNeed: {:.2}\n- Use factor: {:.3} hours per unit spent\n\n",
        metrics.u_buy_useful,
        metrics.u_buy_not_useful,
        metrics.u_not_buy_useful,
        metrics.u_not_buy_not_useful,
        metrics.use_factor
    ));

    output.push_str("## Expected Utilities\n\n");
    output.push_str(&format!(
        "- P(useful|buy): {}\n- P(useful|not buy): {}\n",
        percent(analysis.context.p_useful_if_buy()),
        percent(analysis.context.p_useful_if_not_buy())
    ));
    output.push_str(&format!(
        "- E[U(Buy)]: {:.2}{}\n",
        analysis.expected_utility_buy,
        if buy_wins { " ✓" } else { "" }
    ));
    output.push_str(&format!(
        "- E[U(Don't Buy)]: {:.2}{}\n",
        analysis.expected_utility_not_buy,
        if not_buy_wins { " ✓" } else { "" }
    ));
    output.push_str(&format!(
        "- Breakeven: {}\n\n",
        percent(analysis.breakeven_probability)
    ));

    match analysis.recommendation {
        Recommendation::Buy { gain } => {
            output.push_str(&format!("Recommendation: BUY (gain: {gain:.2})\n"));
        }
        Recommendation::DontBuy { required, held, .. } => {
            output.push_str(&format!(
                "Recommendation: DON'T BUY (need {}, have {})\n",
                percent(required),
                percent(held)
            ));
        }
    }

    if !evaluation.notices.is_empty() {
        output.push_str("\n## Notices\n\n");
        for notice in &evaluation.notices {
            match notice {
                Notice::DefaultedTag { field, tag } => output.push_str(&format!(
                    "- unrecognized {field} '{tag}' was scored with the default weight\n"
                )),
                Notice::ZeroPrice {
                    fallback_use_factor,
                } => output.push_str(&format!(
                    "- price is not positive; fallback use factor {fallback_use_factor} applied\n"
                )),
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&fixtures::evaluation(0.9, 0.1));
        assert!(rendered.contains("# Analysis: Work Laptop"));
        assert!(rendered.contains("## Scenario Values"));
        assert!(rendered.contains("## Expected Utilities"));
        assert!(rendered.contains("Recommendation: BUY (gain: "));
        assert!(rendered.contains("- P(useful|buy): 90.0%"));
    }

    #[test]
    fn markdown_report_marks_winner_and_breakeven_for_dont_buy() {
        let rendered = to_markdown(&fixtures::evaluation(0.1, 0.5));
        assert!(rendered.contains("E[U(Don't Buy)]: "));
        assert!(rendered.contains(" ✓\n"));
        assert!(rendered.contains("Recommendation: DON'T BUY (need "));
        assert!(rendered.contains("have 10.0%)"));
    }

    #[test]
    fn markdown_report_lists_notices() {
        let rendered = to_markdown(&fixtures::evaluation(0.5, 0.5));
        assert!(rendered.contains("## Notices"));
        assert!(rendered.contains("unrecognized life_areas 'family'"));
    }
}
