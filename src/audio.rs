//! Sound cues. Playback is fire-and-forget: a failing sink is logged and
//! never touches game state.

use std::io::{self, Write};

use crate::entities::{GameEvent, Sound};

pub trait AudioSink {
    fn play(&mut self, sound: Sound) -> io::Result<()>;
}

/// Rings the terminal bell for enemy destruction. Shots stay silent.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        TerminalBell { out }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, sound: Sound) -> io::Result<()> {
        match sound {
            Sound::SpacecraftBlast | Sound::OctopusSplat => {
                self.out.write_all(b"\x07")?;
                self.out.flush()
            }
            Sound::Shot => Ok(()),
        }
    }
}

/// Discards every cue (`--mute`).
pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, _sound: Sound) -> io::Result<()> {
        Ok(())
    }
}

/// Play every sound cue among `events`.
pub fn play_cues(sink: &mut dyn AudioSink, events: &[GameEvent]) {
    for event in events {
        if let GameEvent::Sound(sound) = event {
            if let Err(e) = sink.play(*sound) {
                tracing::warn!(?sound, "audio playback failed: {e}");
            }
        }
    }
}
