use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use super::{AudioError, AudioSettings, SoundPlayer};

/// Plays through the default output device.
///
/// `_stream` must outlive every sink created from `handle`; dropping it
/// silences everything.
pub struct RodioPlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    settings: AudioSettings,
    ambience: Option<Sink>,
}

impl RodioPlayer {
    pub fn open(settings: AudioSettings) -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;
        Ok(Self {
            _stream: stream,
            handle,
            settings,
            ambience: None,
        })
    }

    fn new_sink(&self) -> Result<Sink, AudioError> {
        Sink::try_new(&self.handle).map_err(|e| AudioError::Playback(e.to_string()))
    }
}

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|e| AudioError::Missing {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl SoundPlayer for RodioPlayer {
    fn start_ambience(&mut self) -> Result<(), AudioError> {
        self.stop_ambience();

        let source = decode(&self.settings.background)?;
        let sink = self.new_sink()?;
        sink.set_volume(self.settings.volume);
        sink.append(source.repeat_infinite());
        debug!("Ambience started from {}", self.settings.background.display());
        self.ambience = Some(sink);
        Ok(())
    }

    fn stop_ambience(&mut self) {
        if let Some(sink) = self.ambience.take() {
            sink.stop();
            debug!("Ambience stopped");
        }
    }

    fn play_cue(&mut self) -> Result<(), AudioError> {
        let source = decode(&self.settings.interaction)?;
        let sink = self.new_sink()?;
        sink.append(source);
        // Keeps playing after the handle is gone.
        sink.detach();
        Ok(())
    }
}

impl Drop for RodioPlayer {
    fn drop(&mut self) {
        self.stop_ambience();
    }
}
