use partials_core::playback::{BackendResult, PlaybackBackend, Tone};

/// Stand-in sound driver: records every voice change in the log file.
pub struct LogBackend;

impl PlaybackBackend for LogBackend {
    fn start_note(&self, note: usize, tones: &[Tone]) -> BackendResult {
        let freqs: Vec<String> = tones
            .iter()
            .map(|t| format!("{:.2}Hz@{:.2}", t.frequency, t.amplitude))
            .collect();
        log::info!(target: "playback", "start note {}: {}", note + 1, freqs.join(" "));
        Ok(())
    }

    fn stop_note(&self, note: usize) -> BackendResult {
        log::info!(target: "playback", "stop note {}", note + 1);
        Ok(())
    }
}
