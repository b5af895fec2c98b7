use std::io;

use rug_raiders::audio::*;
use rug_raiders::entities::{EnemyKind, GameEvent, Sound};

#[derive(Default)]
struct Recorder {
    played: Vec<Sound>,
}

impl AudioSink for Recorder {
    fn play(&mut self, sound: Sound) -> io::Result<()> {
        self.played.push(sound);
        Ok(())
    }
}

struct Broken;

impl AudioSink for Broken {
    fn play(&mut self, _sound: Sound) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "autoplay blocked"))
    }
}

#[test]
fn only_sound_events_are_played() {
    let events = vec![
        GameEvent::Sound(Sound::Shot),
        GameEvent::LifeLost,
        GameEvent::EnemyDestroyed { kind: EnemyKind::Octopus },
        GameEvent::Sound(Sound::OctopusSplat),
        GameEvent::GameOver { score: 3 },
    ];
    let mut sink = Recorder::default();
    play_cues(&mut sink, &events);
    assert_eq!(sink.played, vec![Sound::Shot, Sound::OctopusSplat]);
}

#[test]
fn failing_sink_is_swallowed() {
    let events = vec![GameEvent::Sound(Sound::SpacecraftBlast)];
    play_cues(&mut Broken, &events); // must not panic
}

#[test]
fn bell_rings_for_destruction_only() {
    let mut buf = Vec::new();
    {
        let mut bell = TerminalBell::new(&mut buf);
        bell.play(Sound::Shot).unwrap();
        bell.play(Sound::SpacecraftBlast).unwrap();
        bell.play(Sound::OctopusSplat).unwrap();
    }
    assert_eq!(buf, b"\x07\x07");
}

#[test]
fn muted_plays_nothing() {
    assert!(Muted.play(Sound::SpacecraftBlast).is_ok());
}
