use chrono::{DateTime, Local};

use crate::duration;

/// One-line report of the time left and the wall-clock moment the wait
/// ends. Remaining time is rounded to the nearest second and may be
/// negative when the end has already passed.
pub fn status_line(end: DateTime<Local>, now: DateTime<Local>) -> String {
    let remaining = duration::round_to_secs(end - now);
    format!(
        "{} left, sleeping till {}\n",
        duration::format(remaining),
        end.format("%H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    #[test]
    fn renders_remaining_and_end_time() {
        let now = Local::now();
        let end = now + TimeDelta::seconds(90);
        let line = status_line(end, now);
        assert_eq!(
            line,
            format!("1m30s left, sleeping till {}\n", end.format("%H:%M:%S"))
        );
    }

    #[test]
    fn rounds_remaining_at_half_second() {
        let now = Local::now();
        let end = now + TimeDelta::milliseconds(89_500);
        assert!(status_line(end, now).starts_with("1m30s left"));
        let end = now + TimeDelta::milliseconds(89_499);
        assert!(status_line(end, now).starts_with("1m29s left"));
    }

    #[test]
    fn end_in_the_past_renders_negative() {
        let now = Local::now();
        let end = now - TimeDelta::seconds(5);
        let line = status_line(end, now);
        assert!(line.starts_with("-5s left"), "got {line:?}");
    }
}
