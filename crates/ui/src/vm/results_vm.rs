use services::{ResultRow, ResultsReport};

use super::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub key: String,
    pub title: String,
    pub badge: &'static str,
    pub badge_class: &'static str,
    pub answer_line: String,
    pub correct_line: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_line: String,
    pub best_line: String,
    pub elapsed_line: String,
    pub rows: Vec<ResultRowVm>,
}

fn map_row(row: &ResultRow) -> ResultRowVm {
    ResultRowVm {
        key: format!("{}-{}", row.position, row.question_id),
        title: format!("Q{}. {}", row.position, row.question),
        badge: row.badge_label(),
        badge_class: if row.is_correct {
            "badge success"
        } else {
            "badge error"
        },
        answer_line: format!("Your answer: {}", row.selected_label()),
        correct_line: row
            .correct_answer
            .as_ref()
            .map(|answer| format!("Correct answer: {answer}")),
    }
}

#[must_use]
pub fn map_results(report: &ResultsReport) -> ResultsVm {
    ResultsVm {
        score_line: format!("Your Score: {}", report.score_label()),
        best_line: format!("Best: {}", report.best_label()),
        elapsed_line: format!("Finished in {}", format_elapsed(report.elapsed)),
        rows: report.rows.iter().map(map_row).collect(),
    }
}
