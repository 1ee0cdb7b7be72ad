mod inbox;

use inbox::{InboxHost, LIST_WIDTH, ROW_HEIGHT};
use swipelist_core::{Point, PointerEvent, SwipeAction, SwipeConfig, SwipeController};
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

struct Driver {
    controller: SwipeController<InboxHost>,
    now: Instant,
}

impl Driver {
    /// Slow horizontal drag across row `index`, released after a short rest.
    fn swipe(&mut self, index: usize, dx: f32) {
        let start = Point::new(LIST_WIDTH / 2.0, (index as f32 + 0.5) * ROW_HEIGHT);
        self.controller
            .on_pointer_event(&PointerEvent::down(start, self.now));
        for step in 1..=10 {
            self.now += FRAME;
            let position = Point::new(start.x + dx * step as f32 / 10.0, start.y);
            self.controller
                .on_pointer_event(&PointerEvent::moved(position, self.now));
        }
        self.now += Duration::from_millis(100);
        let end = Point::new(start.x + dx, start.y);
        self.controller
            .on_pointer_event(&PointerEvent::up(end, self.now));
        self.settle();
    }

    /// Plays every queued animation to the end.
    fn settle(&mut self) {
        while let Some(id) = self.controller.host_mut().next_finished_animation() {
            self.now += self.controller.config().effective_animation_time();
            self.controller.tick(self.now);
            self.controller.on_animation_finished(id);
        }
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("swipelist demo");

    let host = InboxHost::new([
        "Build failed on main",
        "Lunch on Friday?",
        "Quarterly report draft",
        "Your parcel has shipped",
        "Re: flaky test",
        "Weekly digest",
    ]);
    let config = SwipeConfig::default()
        .with_actions(SwipeAction::Reveal, SwipeAction::Dismiss)
        .with_offsets(120.0, 0.0)
        .with_open_on_long_press(false);
    let mut driver = Driver {
        controller: SwipeController::new(host, config)?,
        now: Instant::now(),
    };

    // Reveal the actions behind the first message, then close it again.
    driver.swipe(0, -240.0);
    driver.swipe(0, 240.0);

    // Swipe right to archive.
    driver.swipe(3, 260.0);

    // Select two messages and archive them together.
    driver.controller.on_front_long_press(1)?;
    driver.controller.on_front_long_press(2)?;
    let archived = driver.controller.dismiss_selected()?;
    driver.settle();
    log::info!("archived positions {archived:?}");

    for message in driver.controller.host().messages() {
        log::info!("remaining: {message}");
    }
    Ok(())
}
