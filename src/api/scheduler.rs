use std::str::FromStr;
use std::time::{Duration, Instant, SystemTime};
use chrono::{DateTime, FixedOffset, Local};
use cron::Schedule;
use log::{error, info};

fn datetime_to_instant(datetime: DateTime<FixedOffset>) -> Instant {
    let target_system_time: SystemTime = datetime.into();
    let duration_until = target_system_time
        .duration_since(SystemTime::now())
        .unwrap_or_else(|_| Duration::from_secs(0));
    Instant::now() + duration_until
}

/// Logs a heartbeat on every tick of `expression`. Some hosting platforms reap processes
/// that stay silent for too long.
pub async fn start_keep_alive(expression: String) {
    match Schedule::from_str(&expression) {
        Ok(schedule) => {
            let offset = *Local::now().offset();
            loop {
                let mut upcoming = schedule.upcoming(offset).take(1);
                let Some(datetime) = upcoming.next() else { break };
                tokio::time::sleep_until(tokio::time::Instant::from_std(datetime_to_instant(datetime))).await;
                info!("Keeping the server alive...");
            }
        }
        Err(err) => error!("Failed to start keep alive scheduler: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};
    use chrono::{DateTime, FixedOffset, Local, TimeDelta};
    use crate::api::scheduler::datetime_to_instant;

    #[test]
    fn test_datetime_to_instant() {
        let now: DateTime<FixedOffset> = Local::now().into();

        let past = datetime_to_instant(now - TimeDelta::seconds(30));
        assert!(past <= Instant::now());

        let future = datetime_to_instant(now + TimeDelta::seconds(30));
        let remaining = future.duration_since(Instant::now());
        assert!(remaining > Duration::from_secs(25) && remaining <= Duration::from_secs(30));
    }
}
