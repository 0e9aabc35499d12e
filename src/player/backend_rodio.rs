use super::{AudioLoadError, AudioSink, SeekError, TrackHandle};
use anyhow::Result;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::{
    fs::File,
    io::{BufReader, ErrorKind},
    path::Path,
    time::Duration,
};

pub struct RodioSink {
    sink: Sink,
    _stream: OutputStream,
}

impl RodioSink {
    pub fn new() -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio prints to stderr on drop, which lands on the restored terminal
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            sink,
            _stream: stream,
        })
    }
}

impl AudioSink for RodioSink {
    fn load(&mut self, path: &Path) -> Result<TrackHandle, AudioLoadError> {
        let source = decode(path)?;

        // `clear` leaves the sink paused until `play`
        self.sink.clear();
        self.sink.append(source);

        Ok(TrackHandle::new(path.to_path_buf()))
    }

    fn play(&mut self, _track: &TrackHandle) {
        self.sink.play();
    }

    fn stop(&mut self) {
        self.sink.clear();
    }

    fn seek(&mut self, _track: &TrackHandle, offset: Duration) -> Result<(), SeekError> {
        self.sink.try_seek(offset).map_err(|e| SeekError {
            offset,
            reason: e.to_string(),
        })
    }
}

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, AudioLoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AudioLoadError::NotFound(path.to_path_buf()),
        _ => AudioLoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let len = file
        .metadata()
        .map_err(|e| AudioLoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?
        .len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(len)
        .with_coarse_seek(true)
        .with_seekable(true);

    if let Some(hint) = format_hint(path) {
        builder = builder.with_hint(hint);
    }

    builder.build().map_err(|e| AudioLoadError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Maps less common extensions onto the container name symphonia probes for
fn format_hint(path: &Path) -> Option<&str> {
    let ext = path.extension().and_then(|e| e.to_str())?;

    let hint = match ext {
        "adif" | "adts" => "aac",
        "caf" => "audio/x-caf",
        "m4a" | "m4b" | "m4p" | "m4r" | "mp4" => "audio/mp4",
        "bit" | "mpga" => "mp3",
        "mka" | "mkv" => "audio/matroska",
        "oga" | "ogm" | "ogv" | "ogx" | "spx" => "audio/ogg",
        "wave" => "wav",
        _ => ext,
    };

    Some(hint)
}
