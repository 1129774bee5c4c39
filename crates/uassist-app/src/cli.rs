//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "uassist", about = "Terminal front-end for the Utility Assistant ML service")]
pub struct AppArgs {
    /// Base URL of the ML inference service.
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    /// Disable spoken output.
    #[arg(long, global = true)]
    pub no_speak: bool,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: AppCommand,
}

#[derive(Subcommand, Debug)]
pub enum AppCommand {
    /// Check whether a news article is real or fake.
    NewsVerify {
        /// Article body text.
        #[arg(long)]
        content: Option<String>,

        /// Read the article body from a file instead.
        #[arg(long, conflicts_with = "content")]
        content_file: Option<PathBuf>,

        /// Publishing source of the article.
        #[arg(long)]
        source: String,
    },

    /// Extract text from a captured photo and read it out.
    ReadText {
        /// Path to the captured photo.
        image: PathBuf,
    },

    /// Classify wounds in a captured photo and narrate first aid.
    ClassifyWound {
        /// Path to the captured photo.
        image: PathBuf,
    },

    /// Identify objects in a captured photo.
    IdentifyObjects {
        /// Path to the captured photo.
        image: PathBuf,
    },

    /// List the available features.
    Features,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identify_objects() {
        let args = AppArgs::parse_from(["uassist", "identify-objects", "photo.jpg"]);
        match args.command {
            AppCommand::IdentifyObjects { image } => {
                assert_eq!(image, PathBuf::from("photo.jpg"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let args = AppArgs::parse_from([
            "uassist",
            "news-verify",
            "--content",
            "text",
            "--source",
            "The Daily",
            "--service-url",
            "http://10.0.0.2:5000",
            "--no-speak",
        ]);
        assert_eq!(args.service_url.as_deref(), Some("http://10.0.0.2:5000"));
        assert!(args.no_speak);
    }

    #[test]
    fn test_content_and_content_file_conflict() {
        let result = AppArgs::try_parse_from([
            "uassist",
            "news-verify",
            "--content",
            "text",
            "--content-file",
            "article.txt",
            "--source",
            "s",
        ]);
        assert!(result.is_err());
    }
}
