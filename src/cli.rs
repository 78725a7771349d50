use std::time::Duration;

use chrono::TimeDelta;
use clap::Parser;

use crate::duration;

const HELP_EPILOG: &str = r#"Durations combine integer or fractional values with unit
suffixes (h, m, s, ms): "90s", "1h30m", "2.5m".

While waiting, press return or send SIGUSR1 to print the time
left on stderr.
"#;

#[derive(Debug, Parser)]
#[command(
    name = "hourglass",
    version,
    about = "Sleep until the given durations elapse, then ring",
    long_about = None,
    after_long_help = HELP_EPILOG,
)]
pub struct Cli {
    /// Durations to add up; the wait ends once their sum has elapsed.
    /// No durations means the wait ends on the first check.
    #[arg(value_name = "DURATION", value_parser = duration::parse)]
    pub wait: Vec<TimeDelta>,
    /// Ring the terminal bell when the wait is over
    #[arg(short, long)]
    pub bell: bool,
    /// Show desktop notifications with this title (needs notify-send).
    /// Empty disables them.
    #[arg(short, long, value_name = "TITLE", default_value = "")]
    pub notify: String,
    /// How often to check whether the wait is over
    #[arg(
        short,
        long,
        value_name = "DURATION",
        default_value = "5s",
        value_parser = duration::parse_granularity,
    )]
    pub granularity: Duration,
}

impl Cli {
    /// Sum of all duration arguments.
    pub fn total_wait(&self) -> TimeDelta {
        self.wait
            .iter()
            .fold(TimeDelta::zero(), |total, d| total + *d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_positional_durations() {
        let cli = Cli::parse_from(["hourglass", "1h", "30m", "45s"]);
        assert_eq!(cli.total_wait(), TimeDelta::seconds(5445));
    }

    #[test]
    fn no_durations_means_zero_wait() {
        let cli = Cli::parse_from(["hourglass"]);
        assert_eq!(cli.total_wait(), TimeDelta::zero());
        assert!(!cli.bell);
        assert!(cli.notify.is_empty());
        assert_eq!(cli.granularity, Duration::from_secs(5));
    }

    #[test]
    fn rejects_invalid_token() {
        assert!(Cli::try_parse_from(["hourglass", "1h", "12x"]).is_err());
    }

    #[test]
    fn rejects_zero_granularity() {
        assert!(Cli::try_parse_from(["hourglass", "-g", "0", "1m"]).is_err());
    }
}
