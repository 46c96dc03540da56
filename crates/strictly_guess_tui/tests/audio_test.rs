//! Audio driver tests under paused tokio time.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use strictly_guess::{Effect, SoundCue};
use strictly_guess_tui::{AudioDriver, AudioError, AudioEvent, SoundPlayer};

/// Takes ten seconds per cue and counts stop calls.
#[derive(Default)]
struct SlowPlayer {
    stops: AtomicUsize,
}

#[async_trait::async_trait]
impl SoundPlayer for SlowPlayer {
    async fn play(&self, _cue: SoundCue) -> Result<(), AudioError> {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok(())
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &str {
        "slow"
    }
}

#[tokio::test(start_paused = true)]
async fn test_playback_is_capped() {
    let player = Arc::new(SlowPlayer::default());
    let (mut driver, mut rx) = AudioDriver::new(player.clone(), Duration::from_secs(3));

    let started = tokio::time::Instant::now();
    driver.execute([Effect::PlaySound(SoundCue::CorrectSound)]);
    let event = rx.recv().await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(3));
    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(
        event,
        AudioEvent::Finished {
            ticket: 0,
            cue: SoundCue::CorrectSound,
            capped: true
        }
    );
    assert!(driver.settle(&event));
    assert_eq!(player.stops.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stopped_playback_never_reports() {
    let player = Arc::new(SlowPlayer::default());
    let (mut driver, mut rx) = AudioDriver::new(player, Duration::from_secs(3));

    driver.execute([Effect::PlaySound(SoundCue::FarSound), Effect::StopSound]);
    assert!(!driver.is_busy());

    driver.execute([Effect::PlaySound(SoundCue::CloseSound)]);
    let event = rx.recv().await.unwrap();
    assert!(matches!(event, AudioEvent::Finished { ticket: 1, .. }));
    assert!(driver.settle(&event));
}

#[tokio::test(start_paused = true)]
async fn test_stale_event_ignored() {
    let player = Arc::new(SlowPlayer::default());
    let (mut driver, _rx) = AudioDriver::new(player, Duration::from_secs(3));

    driver.execute([Effect::PlaySound(SoundCue::FarSound)]);
    driver.execute([Effect::PlaySound(SoundCue::CloseSound)]);

    let stale = AudioEvent::Finished {
        ticket: 0,
        cue: SoundCue::FarSound,
        capped: false,
    };
    assert!(!driver.settle(&stale));
    assert!(driver.is_busy());
}
