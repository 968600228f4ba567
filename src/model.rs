//! Data types shared by the config, the yabai query layer and the toggle
//! logic.
//!
//! [`Coordinate`], [`Target`] and [`LaunchOption`] come from the config file.
//! [`Window`] and [`Space`] are snapshots decoded from yabai query
//! responses; they are never cached or mutated, only re-queried.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A pair of signed 16-bit values, used both as a position and as a size.
///
/// In the config file it is written as a two-element array, `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i16; 2]", into = "[i16; 2]")]
pub struct Coordinate {
    pub x: i16,
    pub y: i16,
}

impl Coordinate {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Render as yabai's absolute argument, `abs:<x>:<y>`.
    pub fn to_abs(&self) -> String {
        format!("abs:{}:{}", self.x, self.y)
    }
}

impl From<[i16; 2]> for Coordinate {
    fn from([x, y]: [i16; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for [i16; 2] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y]
    }
}

//  Target

/// Which window a scratchpad refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Match a window whose title is exactly this string.
    Title(String),
    /// Match a window whose owning application has this name.
    Application(String),
}

impl Target {
    /// Classify a bare string: anything containing `.app` is an application
    /// name, everything else a window title.
    ///
    /// This is a heuristic.  A title that happens to contain `.app` is
    /// classified as an application; use the explicit object form in the
    /// config to avoid that.
    pub fn classify(s: &str) -> Self {
        if s.contains(".app") {
            Target::Application(s.to_string())
        } else {
            Target::Title(s.to_string())
        }
    }

    /// Whether `window` is the one this target refers to.
    pub fn matches(&self, window: &Window) -> bool {
        match self {
            Target::Title(title) => window.title == *title,
            Target::Application(app) => window.app == *app,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Title(t) => write!(f, "title {:?}", t),
            Target::Application(a) => write!(f, "app {:?}", a),
        }
    }
}

/// Accepts either a bare string (classified with [`Target::classify`]) or an
/// explicit object, `{"title": "..."}` / `{"app": "..."}`.
impl<'de> Deserialize<'de> for Target {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = Target;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "string or object {{title}} / {{app}}")
            }
            fn visit_str<E>(self, s: &str) -> Result<Target, E>
            where
                E: DeError,
            {
                Ok(Target::classify(s))
            }
            fn visit_map<A>(self, mut map: A) -> Result<Target, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut target = None;
                while let Some(k) = map.next_key::<String>()? {
                    match k.as_str() {
                        "title" => target = Some(Target::Title(map.next_value()?)),
                        "app" => target = Some(Target::Application(map.next_value()?)),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                target.ok_or_else(|| DeError::custom("target: expected a `title` or `app` key"))
            }
        }
        deserializer.deserialize_any(V)
    }
}

impl Serialize for Target {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Target::Title(t) => map.serialize_entry("title", t)?,
            Target::Application(a) => map.serialize_entry("app", a)?,
        }
        map.end()
    }
}

//  Launch option

/// How to start a scratchpad whose window does not exist yet.
///
/// The config file only ever produces [`RawCommand`](LaunchOption::RawCommand):
/// the `launch` key is a shell command string.  The application variants
/// can be constructed in code; they serialize to the equivalent `open -a`
/// command line, so serializing and deserializing again yields a
/// `RawCommand`, not the original variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOption {
    /// `open -a <name>`.
    Application(String),
    /// `open -a <name> --args <args...>`.
    ApplicationWithArgs(String, Vec<String>),
    /// Run through `sh -c`.
    RawCommand(String),
}

impl LaunchOption {
    /// The shell command line equivalent to this option.
    pub fn command_line(&self) -> String {
        match self {
            LaunchOption::Application(name) => format!("open -a {}", shell_quote(name)),
            LaunchOption::ApplicationWithArgs(name, args) => {
                let mut line = format!("open -a {} --args", shell_quote(name));
                for arg in args {
                    line.push(' ');
                    line.push_str(&shell_quote(arg));
                }
                line
            }
            LaunchOption::RawCommand(cmd) => cmd.clone(),
        }
    }
}

/// Single-quote `s` when it contains anything the shell would split or expand.
fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

impl<'de> Deserialize<'de> for LaunchOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(LaunchOption::RawCommand)
    }
}

impl Serialize for LaunchOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.command_line())
    }
}

//  yabai query records

/// Window geometry in screen points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// One element of the `query --windows` response.
///
/// Flags that older yabai releases do not report default to `false`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Window {
    pub id: u32,
    pub pid: i32,
    pub app: String,
    pub title: String,
    pub frame: Frame,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub subrole: String,
    #[serde(default)]
    pub root_window: bool,
    #[serde(default)]
    pub display: u32,
    #[serde(default)]
    pub space: u32,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub sub_level: i32,
    #[serde(default)]
    pub layer: String,
    #[serde(default)]
    pub sub_layer: String,
    #[serde(default)]
    pub opacity: f64,
    #[serde(default)]
    pub split_type: String,
    #[serde(default)]
    pub split_child: String,
    #[serde(default)]
    pub stack_index: u32,
    #[serde(default)]
    pub can_move: bool,
    #[serde(default)]
    pub can_resize: bool,
    #[serde(default)]
    pub has_focus: bool,
    #[serde(default)]
    pub has_shadow: bool,
    #[serde(default)]
    pub has_parent_zoom: bool,
    #[serde(default)]
    pub has_fullscreen_zoom: bool,
    #[serde(default)]
    pub has_ax_reference: bool,
    #[serde(default)]
    pub is_native_fullscreen: bool,
    #[serde(default)]
    pub is_visible: bool,
    #[serde(default)]
    pub is_minimized: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub is_floating: bool,
    #[serde(default)]
    pub is_sticky: bool,
    #[serde(default)]
    pub is_grabbed: bool,
}

/// One element of the `query --spaces` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Space {
    pub id: u32,
    #[serde(default)]
    pub uuid: String,
    pub index: u32,
    #[serde(default)]
    pub label: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub display: u32,
    #[serde(default)]
    pub windows: Vec<u32>,
    #[serde(default)]
    pub first_window: u32,
    #[serde(default)]
    pub last_window: u32,
    #[serde(default)]
    pub has_focus: bool,
    #[serde(default)]
    pub is_visible: bool,
    #[serde(default)]
    pub is_native_fullscreen: bool,
}
