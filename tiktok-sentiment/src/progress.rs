// the indicatif bar stays hidden when stderr is not a tty, so progress is also reported through logs
use {
    std::time::Instant,
    indicatif::ProgressBar,
    tracing::info,
};

pub struct Progress {
    message: String,
    bar: ProgressBar,
    started_at: Instant,
    reported_at: Instant,
    total_processed: u64,
}

impl Progress {
    pub fn new(message: String, total: u64) -> Self {
        Self {
            message,
            bar: ProgressBar::new(total),
            started_at: Instant::now(),
            reported_at: Instant::now(),
            total_processed: 0,
        }
    }

    pub fn update(&mut self) -> bool {
        self.total_processed += 1;
        self.bar.inc(1);

        let now = Instant::now();
        if (now - self.reported_at).as_millis() >= 10_000 {
            self.reported_at = now;
            info!("{}: {} total ({:.2}/second)", self.message, self.total_processed, self.rate(now));
            true
        } else {
            false
        }
    }

    pub fn finish(&self) {
        self.bar.finish();
        info!("{}: done, {} total ({:.2}/second)", self.message, self.total_processed, self.rate(Instant::now()));
    }

    fn rate(&self, now: Instant) -> f32 {
        let elapsed = (now - self.started_at).as_secs_f32();
        if elapsed > 0.0 {
            (self.total_processed as f32) / elapsed
        } else {
            0.0
        }
    }
}
