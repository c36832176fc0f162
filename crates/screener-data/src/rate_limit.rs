//! 외부 API 호출 레이트 리미터.
//!
//! 종목과 무관하게 모든 외부 호출 사이에 최소 간격을 강제하는
//! 단순 스로틀입니다. 토큰 버킷이 아니며 프로세스 로컬입니다.
//! 타임스탬프는 `&mut self`로만 접근하므로 동시 호출에 의한 경합은
//! 소유권 수준에서 차단됩니다.

use tokio::time::{sleep, Duration, Instant};

/// 최소 호출 간격 스로틀.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Option<Instant>,
}

impl RateLimiter {
    /// 지정한 최소 간격으로 리미터를 생성합니다.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: None,
        }
    }

    /// 밀리초 단위 간격으로 리미터를 생성합니다.
    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// 직전 호출로부터 최소 간격이 지날 때까지 대기한 뒤 호출 시각을 기록합니다.
    pub async fn acquire(&mut self) {
        if let Some(last) = self.last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_call = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_acquire_does_not_wait() {
        let mut limiter = RateLimiter::from_millis(1000);
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_consecutive_acquires_are_spaced() {
        let mut limiter = RateLimiter::from_millis(1000);
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;
        // 3회 호출이면 최소 2초의 간격이 필요하다
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_wait_after_interval_elapsed() {
        let mut limiter = RateLimiter::from_millis(1000);
        limiter.acquire().await;

        tokio::time::advance(Duration::from_millis(1500)).await;

        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(1));
    }
}
