//! `notewise config`: print the effective inference configuration.

use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};

use notewise_inference::HuggingFaceConfig;

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Print as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Configuration as JSON, with the token reduced to a presence flag.
fn describe(config: &HuggingFaceConfig) -> Value {
    let token = if config.api_token.is_some() {
        "set"
    } else {
        "missing"
    };
    json!({
        "base_url": config.base_url,
        "api_token": token,
        "summary_model": config.summary_model,
        "classifier_model": config.classifier_model,
        "summary_max_length": config.summary_max_length,
        "summary_min_length": config.summary_min_length,
        "max_attempts": config.max_attempts,
        "retry_delay_ms": config.retry_delay.as_millis() as u64,
        "confidence_threshold": config.confidence_threshold,
        "timeout_seconds": config.timeout_seconds,
    })
}

pub fn run(args: ConfigArgs) -> Result<()> {
    let config = HuggingFaceConfig::from_env();
    let described = describe(&config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&described)?);
    } else if let Value::Object(fields) = &described {
        for (key, value) in fields {
            match value {
                Value::String(s) => println!("{:<22} {}", key, s),
                other => println!("{:<22} {}", key, other),
            }
        }
    }

    if let Err(e) = config.validate() {
        eprintln!("warning: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_redacts_token() {
        let config = HuggingFaceConfig::default().with_token("hf_secret");
        let described = describe(&config);
        assert_eq!(described["api_token"], "set");
        assert!(!described.to_string().contains("hf_secret"));
        assert_eq!(described["max_attempts"], 3);
        assert_eq!(described["retry_delay_ms"], 5000);
    }

    #[test]
    fn test_describe_missing_token() {
        let described = describe(&HuggingFaceConfig::default());
        assert_eq!(described["api_token"], "missing");
    }
}
