use std::time::Duration;

/// Delay policy applied before every outbound request.
///
/// Requests are issued one at a time, so a fixed pause before each one
/// keeps the request rate at or below one per interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throttle {
    Fixed(Duration),
    None,
}

impl Throttle {
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Throttle::None
        } else {
            Throttle::Fixed(Duration::from_millis(ms))
        }
    }

    pub async fn wait(&self) {
        if let Throttle::Fixed(delay) = self {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_millis_disables_throttle() {
        assert_eq!(Throttle::from_millis(0), Throttle::None);
        assert_eq!(
            Throttle::from_millis(300),
            Throttle::Fixed(Duration::from_millis(300))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_waits_full_delay() {
        let start = tokio::time::Instant::now();
        Throttle::Fixed(Duration::from_millis(300)).wait().await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn none_returns_immediately() {
        let start = tokio::time::Instant::now();
        Throttle::None.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
