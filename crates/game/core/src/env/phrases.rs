/// Fixed speaker names and system lines used by interactions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Phrasebook {
    /// Speaker of the player's own lines.
    pub player_name: String,
    pub system_speaker: String,
    pub memory_speaker: String,
    pub sign_speaker: String,
    pub memory_already_collected: String,
    pub encounter_already_resolved: String,
    /// What the player answers before every encounter menu.
    pub encounter_reply: String,
    /// `{bonus}` is replaced with the love gained.
    pub love_gain: String,
}

impl Phrasebook {
    pub fn love_gain(&self, bonus: u8) -> String {
        self.love_gain.replace("{bonus}", &bonus.to_string())
    }
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self {
            player_name: "Yo".into(),
            system_speaker: "Sistema".into(),
            memory_speaker: "Recuerdo".into(),
            sign_speaker: "Letrero".into(),
            memory_already_collected: "Ese recuerdo ya vive contigo.".into(),
            encounter_already_resolved: "Este momento ya fue transformado en fuerza.".into(),
            encounter_reply: "No te peleo. Te entiendo... y te transformo.".into(),
            love_gain: "Love Meter +{bonus}".into(),
        }
    }
}
