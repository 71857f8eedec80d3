use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use nd_inference::generators::{PodcastLine, Speaker};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }

    fn is_english(&self) -> bool {
        self.lang.to_lowercase().starts_with("en")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<Voice>,
    pub rate: f32,
    pub pitch: f32,
}

/// Where spoken podcast lines go. Implementations must not block.
pub trait SpeechSynthesizer: Send + Sync {
    fn voices(&self) -> Vec<Voice>;
    fn speak(&self, utterance: Utterance);
    fn cancel(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Unknown,
}

const FEMALE_SPEAKERS: [&str; 2] = ["sarah", "webb"];
const MALE_SPEAKERS: [&str; 2] = ["alex", "chen"];

const FEMALE_VOICE_HINTS: [&str; 5] = ["female", "samantha", "zira", "victoria", "karen"];
const MALE_VOICE_HINTS: [&str; 5] = ["male", "david", "daniel", "alex", "fred"];

pub fn speaker_gender(name: &str) -> Gender {
    let lowered = name.to_lowercase();
    if FEMALE_SPEAKERS.iter().any(|hint| lowered.contains(hint)) {
        Gender::Female
    } else if MALE_SPEAKERS.iter().any(|hint| lowered.contains(hint)) {
        Gender::Male
    } else {
        Gender::Unknown
    }
}

fn voice_gender(voice: &Voice) -> Gender {
    let lowered = voice.name.to_lowercase();
    if FEMALE_VOICE_HINTS.iter().any(|hint| lowered.contains(hint)) {
        // checked first: "female" contains "male"
        Gender::Female
    } else if MALE_VOICE_HINTS.iter().any(|hint| lowered.contains(hint)) {
        Gender::Male
    } else {
        Gender::Unknown
    }
}

/// Picks a voice for `speaker`: an English voice whose name suggests the
/// speaker's gender, else the first English voice, else the first voice.
pub fn select_voice<'a>(voices: &'a [Voice], speaker: &str) -> Option<&'a Voice> {
    let english: Vec<&Voice> = voices.iter().filter(|voice| voice.is_english()).collect();
    let pool: Vec<&Voice> = if english.is_empty() {
        voices.iter().collect()
    } else {
        english
    };

    let gender = speaker_gender(speaker);
    if gender != Gender::Unknown {
        if let Some(voice) = pool.iter().find(|voice| voice_gender(voice) == gender) {
            return Some(*voice);
        }
    }
    pool.first().copied()
}

pub fn utterance_for(line: &PodcastLine, voices: &[Voice]) -> Utterance {
    let (rate, pitch) = match line.speaker {
        Speaker::Host => (1.0, 1.0),
        Speaker::Expert => (0.95, 0.9),
        Speaker::Audience => (1.05, 1.1),
    };
    Utterance {
        text: line.content.clone(),
        voice: select_voice(voices, &line.name).cloned(),
        rate,
        pitch,
    }
}

/// Logs each utterance instead of playing audio.
#[derive(Debug, Clone)]
pub struct TracingSpeech {
    voices: Vec<Voice>,
}

impl TracingSpeech {
    pub fn new() -> Self {
        Self {
            voices: vec![
                Voice::new("Daniel", "en-GB"),
                Voice::new("Samantha", "en-US"),
                Voice::new("Thomas", "fr-FR"),
            ],
        }
    }
}

impl Default for TracingSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechSynthesizer for TracingSpeech {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&self, utterance: Utterance) {
        let voice = utterance
            .voice
            .as_ref()
            .map(|voice| voice.name.as_str())
            .unwrap_or("default");
        info!("🎙️ [{}] {}", voice, utterance.text);
    }

    fn cancel(&self) {
        debug!("🔇 Speech cancelled");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpeech;

impl SpeechSynthesizer for NullSpeech {
    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(&self, _utterance: Utterance) {}

    fn cancel(&self) {}
}

/// Keeps everything it was asked to say.
#[derive(Debug, Default)]
pub struct RecordingSpeech {
    voices: Vec<Voice>,
    spoken: Mutex<Vec<Utterance>>,
    cancels: AtomicUsize,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_voices(voices: Vec<Voice>) -> Self {
        Self {
            voices,
            ..Self::default()
        }
    }

    pub fn spoken(&self) -> Vec<Utterance> {
        self.spoken
            .lock()
            .map(|spoken| spoken.clone())
            .unwrap_or_default()
    }

    pub fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

impl SpeechSynthesizer for RecordingSpeech {
    fn voices(&self) -> Vec<Voice> {
        self.voices.clone()
    }

    fn speak(&self, utterance: Utterance) {
        if let Ok(mut spoken) = self.spoken.lock() {
            spoken.push(utterance);
        }
    }

    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_inference::generators::podcast::HOST_NAME;

    fn voices() -> Vec<Voice> {
        vec![
            Voice::new("Amélie", "fr-CA"),
            Voice::new("Microsoft Zira", "en-US"),
            Voice::new("Google UK English Male", "en-GB"),
            Voice::new("Google UK English Female", "en-GB"),
        ]
    }

    #[test]
    fn test_speaker_gender() {
        assert_eq!(speaker_gender(HOST_NAME), Gender::Male);
        assert_eq!(speaker_gender("Dr. Sarah Webb (Science Expert)"), Gender::Female);
        assert_eq!(speaker_gender("You (Audience)"), Gender::Unknown);
    }

    #[test]
    fn test_female_is_not_mistaken_for_male() {
        let voices = vec![
            Voice::new("English Female", "en-US"),
            Voice::new("English Male", "en-US"),
        ];
        let voice = select_voice(&voices, HOST_NAME).unwrap();
        assert_eq!(voice.name, "English Male");
    }

    #[test]
    fn test_select_voice_prefers_english_gender_match() {
        let voices = voices();
        assert_eq!(select_voice(&voices, "Dr. Sarah Webb").unwrap().name, "Microsoft Zira");
        assert_eq!(select_voice(&voices, HOST_NAME).unwrap().name, "Google UK English Male");
        assert_eq!(select_voice(&voices, "You (Audience)").unwrap().name, "Microsoft Zira");
    }

    #[test]
    fn test_select_voice_fallbacks() {
        let foreign = vec![Voice::new("Amélie", "fr-CA"), Voice::new("Anna", "de-DE")];
        assert_eq!(select_voice(&foreign, HOST_NAME).unwrap().name, "Amélie");
        assert!(select_voice(&[], HOST_NAME).is_none());
    }

    #[test]
    fn test_host_and_expert_sound_different() {
        let host = PodcastLine::new("1", Speaker::Host, HOST_NAME, "Welcome");
        let expert =
            PodcastLine::new("2", Speaker::Expert, "Dr. Sarah Webb (Health Expert)", "Thanks");
        let voices = voices();
        let a = utterance_for(&host, &voices);
        let b = utterance_for(&expert, &voices);
        assert_ne!((a.rate, a.pitch), (b.rate, b.pitch));
        assert_ne!(a.voice, b.voice);
    }

    #[test]
    fn test_recording_speech() {
        let speech = RecordingSpeech::new();
        speech.speak(Utterance {
            text: "hello".to_string(),
            voice: None,
            rate: 1.0,
            pitch: 1.0,
        });
        speech.cancel();
        assert_eq!(speech.spoken().len(), 1);
        assert_eq!(speech.cancel_count(), 1);
    }
}
