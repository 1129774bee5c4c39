//! News verification screen.

use validator::Validate;

use uassist_ml_client::MlClient;
use uassist_models::{ActivityLog, CredibilityReport, Feature, NewsArticle};

use crate::error::{AppError, AppResult};
use crate::logging::SubmitLogger;
use crate::session::ScreenSession;

const MISSING_FIELDS: &str = "Please fill in both Content and Source.";

pub async fn run(
    client: &MlClient,
    session: &mut ScreenSession<CredibilityReport>,
    activity: &mut ActivityLog,
    article: NewsArticle,
) -> AppResult<Vec<String>> {
    if article.validate().is_err() {
        return Err(AppError::invalid_input(MISSING_FIELDS));
    }

    let logger = SubmitLogger::new(Feature::NewsVerify);
    logger.log_start(&format!("article from '{}'", article.source));

    session.begin()?;
    let report = match client.verify_news(&article).await {
        Ok(report) => {
            session.finish(Some(report.clone()));
            report
        }
        Err(e) => {
            session.finish(None);
            logger.log_error(&e.to_string());
            return Err(e.into());
        }
    };

    logger.log_completion(&format!("{} model verdicts", report.predictions.len()));
    activity.record(
        Feature::NewsVerify,
        format!("Checked article from {}", article.source),
    );

    let mut lines = vec!["Predictions:".to_string()];
    lines.extend(report.lines());
    Ok(lines)
}
