//! UI string tables for the supported languages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Es,
    Pt,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::En, Lang::Es, Lang::Pt];

    pub fn as_code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Pt => "pt",
        }
    }

    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Lang {
        match code {
            "es" => Lang::Es,
            "pt" => Lang::Pt,
            _ => Lang::En,
        }
    }

    pub fn dict(self) -> &'static Dict {
        match self {
            Lang::En => &EN,
            Lang::Es => &ES,
            Lang::Pt => &PT,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Dict {
    pub stopwatch: &'static str,
    pub countdown: &'static str,
    pub mode: &'static str,
    pub enter_time: &'static str,
    pub apply: &'static str,
    pub start: &'static str,
    pub pause: &'static str,
    pub reset: &'static str,
    pub theme: &'static str,
    pub tip_title: &'static str,
    pub tip_text: &'static str,
    pub invalid_time: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

static EN: Dict = Dict {
    stopwatch: "Stopwatch",
    countdown: "Countdown",
    mode: "Mode",
    enter_time: "Enter time",
    apply: "Apply",
    start: "Start",
    pause: "Pause",
    reset: "Reset",
    theme: "Theme",
    tip_title: "Tip",
    tip_text: "Use the language selector to switch EN/ES/PT. Theme is remembered. \
               Countdown input accepts \u{201c}1:30\u{201d}, \u{201c}90s\u{201d}, \u{201c}1h 20m\u{201d}.",
    invalid_time: "Please enter a valid time.",
    light: "Light",
    dark: "Dark",
};

static ES: Dict = Dict {
    stopwatch: "Cronómetro",
    countdown: "Cuenta atrás",
    mode: "Modo",
    enter_time: "Introduce tiempo",
    apply: "Aplicar",
    start: "Iniciar",
    pause: "Pausar",
    reset: "Reiniciar",
    theme: "Tema",
    tip_title: "Consejo",
    tip_text: "Cambia EN/ES/PT con el selector. El tema se recuerda. \
               Acepta \u{201c}1:30\u{201d}, \u{201c}90s\u{201d}, \u{201c}1h 20m\u{201d}.",
    invalid_time: "Por favor introduce un tiempo válido.",
    light: "Claro",
    dark: "Oscuro",
};

static PT: Dict = Dict {
    stopwatch: "Cronômetro",
    countdown: "Contagem regressiva",
    mode: "Modo",
    enter_time: "Insira o tempo",
    apply: "Aplicar",
    start: "Iniciar",
    pause: "Pausar",
    reset: "Repor",
    theme: "Tema",
    tip_title: "Dica",
    tip_text: "Use o seletor para alternar EN/ES/PT. O tema é lembrado. \
               Aceita \u{201c}1:30\u{201d}, \u{201c}90s\u{201d}, \u{201c}1h 20m\u{201d}.",
    invalid_time: "Insira um tempo válido.",
    light: "Claro",
    dark: "Escuro",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Theme {
        match code {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self, dict: &'static Dict) -> &'static str {
        match self {
            Theme::Light => dict.light,
            Theme::Dark => dict.dark,
        }
    }
}
