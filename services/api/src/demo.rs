use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;
use talentflow::error::AppError;
use talentflow::workflows::interview::scorecards::{
    AggregationError, InterviewFeedback, InterviewId, InterviewerId, InterviewScoreboard,
    Score, ScoreOutOfRange, ScorecardAggregator, ScorecardService, ScorecardSubmission,
};
use talentflow::workflows::panelsheet::PanelSheetImporter;

use crate::infra::{
    default_dimension_weights, parse_date, InMemoryFeedbackRepository,
    InMemoryNotificationPublisher,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreboardReportArgs {
    /// Interview identifier the sheet belongs to
    #[arg(long)]
    pub(crate) interview_id: String,
    /// Panel-sheet CSV export with one row per interviewer
    #[arg(long)]
    pub(crate) panel_csv: PathBuf,
    /// Fallback submission date for rows without a Submitted At value (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) imported_on: Option<NaiveDate>,
    /// Include the per-interviewer panel listing in the output
    #[arg(long)]
    pub(crate) list_panel: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Interview identifier used for the demo records
    #[arg(long)]
    pub(crate) interview_id: Option<String>,
    /// Optional panel-sheet CSV to aggregate instead of the built-in panel
    #[arg(long)]
    pub(crate) panel_csv: Option<PathBuf>,
    /// Include the per-interviewer panel listing in the output
    #[arg(long)]
    pub(crate) list_panel: bool,
}

pub(crate) fn run_scoreboard_report(args: ScoreboardReportArgs) -> Result<(), AppError> {
    let ScoreboardReportArgs {
        interview_id,
        panel_csv,
        imported_on,
        list_panel,
    } = args;

    let interview_id = InterviewId(interview_id);
    let imported_on = imported_on.unwrap_or_else(|| Local::now().date_naive());
    let imported_at = imported_on.and_time(NaiveTime::MIN);

    let feedbacks = PanelSheetImporter::from_path(panel_csv, &interview_id, imported_at)?;
    let scoreboard = build_scoreboard(interview_id, &feedbacks);

    println!("Panel sheet import ({} row(s) accepted)", feedbacks.len());
    render_scoreboard(&scoreboard, list_panel);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        interview_id,
        panel_csv,
        list_panel,
    } = args;

    let interview_id = InterviewId(interview_id.unwrap_or_else(|| "int-demo-01".to_string()));

    println!("Scorecard workflow demo");

    if let Some(path) = panel_csv {
        let imported_at = Local::now().date_naive().and_time(NaiveTime::MIN);
        let feedbacks = PanelSheetImporter::from_path(path, &interview_id, imported_at)?;
        let scoreboard = build_scoreboard(interview_id, &feedbacks);
        println!("Data source: panel sheet CSV import");
        render_scoreboard(&scoreboard, list_panel);
        return Ok(());
    }

    println!("Data source: built-in demo panel");
    let repository = Arc::new(InMemoryFeedbackRepository::default());
    let notifier = Arc::new(InMemoryNotificationPublisher::default());
    let service = ScorecardService::new(
        repository,
        notifier.clone(),
        default_dimension_weights(),
    );

    for (interviewer, ratings, comments) in demo_panel() {
        let submission = match demo_submission(interviewer, ratings, comments) {
            Ok(submission) => submission,
            Err(err) => {
                println!("- Demo row for {interviewer} invalid: {err}");
                continue;
            }
        };
        match service.submit(interview_id.clone(), submission) {
            Ok(feedback) => println!(
                "- Accepted scorecard from {} ({} / {} / {})",
                feedback.interviewer_id.0,
                feedback.technical.score,
                feedback.behavioral.score,
                feedback.cultural.score
            ),
            Err(err) => println!("- Submission from {interviewer} rejected: {err}"),
        }
    }

    println!("\nAttempting an unjustified extreme rating");
    match demo_submission("casey.morgan", (2, 5, 6), ("", "", "")) {
        Ok(submission) => match service.submit(interview_id.clone(), submission) {
            Ok(_) => println!("  Unexpectedly accepted"),
            Err(err) => println!("  Rejected as expected: {err}"),
        },
        Err(err) => println!("  Demo row invalid: {err}"),
    }

    let scoreboard = match service.scoreboard(&interview_id) {
        Ok(scoreboard) => scoreboard,
        Err(err) => {
            println!("  Scoreboard unavailable: {err}");
            return Ok(());
        }
    };
    render_scoreboard(&scoreboard, list_panel);

    match serde_json::to_string_pretty(&scoreboard) {
        Ok(json) => println!("\nScoreboard payload:\n{json}"),
        Err(err) => println!("\nScoreboard payload unavailable: {err}"),
    }

    let events = notifier.events();
    if events.is_empty() {
        println!("\nNotifications: none dispatched");
    } else {
        println!("\nNotifications:");
        for event in events {
            println!(
                "  - {} -> {} by {}",
                event.event, event.interview_id.0, event.interviewer_id.0
            );
        }
    }

    Ok(())
}

fn build_scoreboard(
    interview_id: InterviewId,
    feedbacks: &[InterviewFeedback],
) -> InterviewScoreboard {
    let aggregator = ScorecardAggregator::new(default_dimension_weights());
    match aggregator.aggregate(feedbacks) {
        Ok(score) => InterviewScoreboard::evaluated(score, feedbacks),
        Err(AggregationError::NoFeedback) => InterviewScoreboard::not_yet_evaluated(interview_id),
    }
}

type DemoRow = (&'static str, (u8, u8, u8), (&'static str, &'static str, &'static str));

fn demo_panel() -> Vec<DemoRow> {
    vec![
        (
            "priya.raman",
            (8, 7, 9),
            ("", "", "Raised the bar for every team exercise"),
        ),
        (
            "lin.chen",
            (9, 8, 8),
            ("Best systems design round this quarter", "", ""),
        ),
        (
            "sam.okafor",
            (7, 9, 9),
            ("", "Outstanding ownership examples", "Clear culture add"),
        ),
    ]
}

fn demo_submission(
    interviewer: &str,
    ratings: (u8, u8, u8),
    comments: (&str, &str, &str),
) -> Result<ScorecardSubmission, ScoreOutOfRange> {
    let (technical, behavioral, culture) = ratings;
    let (technical_comments, behavioral_comments, culture_comments) = comments;
    Ok(ScorecardSubmission {
        interviewer_id: InterviewerId(interviewer.to_string()),
        technical: Score::new(technical)?,
        behavioral: Score::new(behavioral)?,
        culture: Score::new(culture)?,
        technical_comments: technical_comments.to_string(),
        behavioral_comments: behavioral_comments.to_string(),
        culture_comments: culture_comments.to_string(),
        overall_comments: None,
    })
}

fn render_scoreboard(scoreboard: &InterviewScoreboard, list_panel: bool) {
    println!("\nInterview {}", scoreboard.interview_id.0);
    println!(
        "Status: {} ({} scorecard(s))",
        scoreboard.status, scoreboard.feedback_count
    );

    let score = match &scoreboard.score {
        Some(score) => score,
        None => {
            println!("No submitted feedback yet; nothing to aggregate.");
            return;
        }
    };

    println!(
        "Overall {:.3} -> {}",
        score.overall, score.recommendation_label
    );
    println!("Dimension breakdown");
    for entry in &score.dimensions {
        println!(
            "- {}: avg {:.3} x weight {:.2} = {:.3}",
            entry.dimension_label, entry.average, entry.weight, entry.weighted
        );
    }

    if list_panel {
        println!("Panel");
        for panelist in &scoreboard.panel {
            let flag = if panelist.has_extreme_rating {
                " [extreme rating justified]"
            } else {
                ""
            };
            println!(
                "- {} | T{} B{} C{} | submitted {}{}",
                panelist.interviewer_id.0,
                panelist.technical,
                panelist.behavioral,
                panelist.culture,
                panelist.submitted_at,
                flag
            );
        }
    }
}
