//! Typed yabai commands on top of a [`Transport`].
//!
//! Queries decode their JSON response into [`Window`] / [`Space`] records.
//! Window commands are fire-and-forget: their response text is discarded and
//! their effect is only observable by querying again.

use crate::error::{Error, Result};
use crate::model::{Coordinate, Space, Target, Window};
use crate::traits::Transport;
use log::debug;

/// yabai command client.
pub struct Yabai<T: Transport> {
    transport: T,
}

impl<T: Transport> Yabai<T> {
    /// Create a client that sends every command through `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn send(&self, tokens: &[&str]) -> Result<String> {
        let command: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        self.transport.query(&command)
    }

    fn window_command(&self, id: u32, args: &[&str]) -> Result<()> {
        let id = id.to_string();
        let mut tokens = vec!["window", id.as_str()];
        tokens.extend_from_slice(args);
        self.send(&tokens)?;
        Ok(())
    }

    //  Queries

    /// `query --windows`
    pub fn list_windows(&self) -> Result<Vec<Window>> {
        let json = self.send(&["query", "--windows"])?;
        Ok(serde_json::from_str(&json)?)
    }

    /// `query --spaces`
    pub fn list_spaces(&self) -> Result<Vec<Space>> {
        let json = self.send(&["query", "--spaces"])?;
        Ok(serde_json::from_str(&json)?)
    }

    /// The first window matching `target`, if any.
    pub fn find_window(&self, target: &Target) -> Result<Option<Window>> {
        let window = self.list_windows()?.into_iter().find(|w| target.matches(w));
        match &window {
            Some(w) => debug!("{} resolved to window {}", target, w.id),
            None => debug!("no window for {}", target),
        }
        Ok(window)
    }

    /// The first space with focus.
    pub fn focused_space(&self) -> Result<Space> {
        self.list_spaces()?
            .into_iter()
            .find(|s| s.has_focus)
            .ok_or(Error::NoFocusedSpace)
    }

    //  Window commands

    /// Send window `id` to `space` without following it.
    ///
    /// Same wire command as [`window_move_to_space`](Self::window_move_to_space):
    /// yabai keeps focus on the current space, which is what hides a
    /// scratchpad.
    pub fn window_focus_on_space(&self, id: u32, space: u32) -> Result<()> {
        self.window_command(id, &["--space", &space.to_string()])
    }

    /// `window <id> --toggle float`
    pub fn window_toggle_float(&self, id: u32) -> Result<()> {
        self.window_command(id, &["--toggle", "float"])
    }

    /// `window <id> --space <space>`
    pub fn window_move_to_space(&self, id: u32, space: u32) -> Result<()> {
        self.window_command(id, &["--space", &space.to_string()])
    }

    /// `window <id> --move abs:<x>:<y>`
    pub fn window_move(&self, id: u32, position: Coordinate) -> Result<()> {
        self.window_command(id, &["--move", &position.to_abs()])
    }

    /// `window <id> --resize abs:<w>:<h>`
    pub fn window_resize(&self, id: u32, size: Coordinate) -> Result<()> {
        self.window_command(id, &["--resize", &size.to_abs()])
    }

    /// `window --focus <id>`
    pub fn focus_window(&self, id: u32) -> Result<()> {
        self.send(&["window", "--focus", &id.to_string()])?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Transport double that records every command and answers queries
    /// from canned responses.
    ///
    /// `query --windows` pops the next entry of `windows` (repeating the last
    /// one once the queue is down to a single entry); `query --spaces`
    /// always returns `spaces`.  Everything else gets an empty reply.
    #[derive(Default)]
    pub(crate) struct RecordingTransport {
        pub log: RefCell<Vec<String>>,
        pub windows: RefCell<VecDeque<String>>,
        pub spaces: String,
    }

    impl RecordingTransport {
        pub(crate) fn new(windows: &[&str], spaces: &str) -> Self {
            Self {
                log: RefCell::new(Vec::new()),
                windows: RefCell::new(windows.iter().map(|s| s.to_string()).collect()),
                spaces: spaces.to_string(),
            }
        }

        /// Logged commands other than queries.
        pub(crate) fn commands(&self) -> Vec<String> {
            self.log
                .borrow()
                .iter()
                .filter(|c| !c.starts_with("query"))
                .cloned()
                .collect()
        }
    }

    impl Transport for RecordingTransport {
        fn query(&self, command: &[String]) -> Result<String> {
            let line = command.join(" ");
            self.log.borrow_mut().push(line.clone());
            Ok(match line.as_str() {
                "query --windows" => {
                    let mut queue = self.windows.borrow_mut();
                    if queue.len() > 1 {
                        queue.pop_front().unwrap_or_default()
                    } else {
                        queue.front().cloned().unwrap_or_else(|| "[]".into())
                    }
                }
                "query --spaces" => self.spaces.clone(),
                _ => String::new(),
            })
        }
    }

    pub(crate) fn window_json(id: u32, app: &str, title: &str, focus: bool, floating: bool) -> String {
        format!(
            r#"{{"id":{id},"pid":100,"app":"{app}","title":"{title}",
                "frame":{{"x":0.0,"y":0.0,"w":640.0,"h":480.0}},
                "has-focus":{focus},"is-floating":{floating}}}"#
        )
    }

    pub(crate) fn space_json(index: u32, focus: bool) -> String {
        format!(r#"{{"id":{},"index":{index},"has-focus":{focus}}}"#, index + 100)
    }

    #[test]
    fn list_windows_decodes_response() {
        let windows = format!(
            "[{},{}]",
            window_json(1, "Notes", "a", false, false),
            window_json(2, "Safari", "b", true, true)
        );
        let yabai = Yabai::new(RecordingTransport::new(&[&windows], "[]"));
        let list = yabai.list_windows().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].app, "Safari");
        assert!(list[1].has_focus);
        assert_eq!(*yabai.transport().log.borrow(), vec!["query --windows"]);
    }

    #[test]
    fn list_spaces_decodes_response() {
        let spaces = format!("[{},{}]", space_json(1, false), space_json(2, true));
        let yabai = Yabai::new(RecordingTransport::new(&[], &spaces));
        let list = yabai.list_spaces().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].index, 2);
        assert_eq!(*yabai.transport().log.borrow(), vec!["query --spaces"]);
    }

    #[test]
    fn garbage_response_is_a_parse_error() {
        let yabai = Yabai::new(RecordingTransport::new(&["not json"], "[]"));
        assert!(matches!(yabai.list_windows(), Err(Error::Parse(_))));
    }

    #[test]
    fn empty_response_is_a_parse_error() {
        let yabai = Yabai::new(RecordingTransport::new(&[""], ""));
        assert!(matches!(yabai.list_windows(), Err(Error::Parse(_))));
        assert!(matches!(yabai.list_spaces(), Err(Error::Parse(_))));
    }

    #[test]
    fn find_window_by_title_and_app() {
        let windows = format!(
            "[{},{},{}]",
            window_json(1, "Terminal", "scratch", false, false),
            window_json(2, "Notes.app", "todo", false, false),
            window_json(3, "Notes.app", "other", false, false)
        );
        let yabai = Yabai::new(RecordingTransport::new(&[&windows], "[]"));

        let w = yabai.find_window(&Target::Title("scratch".into())).unwrap();
        assert_eq!(w.map(|w| w.id), Some(1));

        let w = yabai.find_window(&Target::Application("Notes.app".into())).unwrap();
        assert_eq!(w.map(|w| w.id), Some(2));

        let w = yabai.find_window(&Target::Title("missing".into())).unwrap();
        assert!(w.is_none());
    }

    #[test]
    fn focused_space_picks_first_focused() {
        let spaces = format!(
            "[{},{},{}]",
            space_json(1, false),
            space_json(3, true),
            space_json(4, true)
        );
        let yabai = Yabai::new(RecordingTransport::new(&[], &spaces));
        assert_eq!(yabai.focused_space().unwrap().index, 3);
    }

    #[test]
    fn focused_space_missing_is_an_error() {
        let yabai = Yabai::new(RecordingTransport::new(&[], "[]"));
        assert!(matches!(yabai.focused_space(), Err(Error::NoFocusedSpace)));

        let spaces = format!("[{}]", space_json(1, false));
        let yabai = Yabai::new(RecordingTransport::new(&[], &spaces));
        assert!(matches!(yabai.focused_space(), Err(Error::NoFocusedSpace)));
    }

    #[test]
    fn window_commands_render_tokens() {
        let yabai = Yabai::new(RecordingTransport::default());
        yabai.window_focus_on_space(7, 9).unwrap();
        yabai.window_toggle_float(7).unwrap();
        yabai.window_move_to_space(7, 3).unwrap();
        yabai.window_move(7, Coordinate::new(100, -20)).unwrap();
        yabai.window_resize(7, Coordinate::new(800, 600)).unwrap();
        yabai.focus_window(7).unwrap();
        assert_eq!(
            *yabai.transport().log.borrow(),
            vec![
                "window 7 --space 9",
                "window 7 --toggle float",
                "window 7 --space 3",
                "window 7 --move abs:100:-20",
                "window 7 --resize abs:800:600",
                "window --focus 7",
            ]
        );
    }
}
