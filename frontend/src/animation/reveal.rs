use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl VisualState {
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Power1InOut,
    Power2Out,
    Power3Out,
    SineInOut,
    /// CSS has no spring curve, so this overshoots once and settles.
    ElasticOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Power1InOut => "cubic-bezier(0.45, 0, 0.55, 1)",
            Ease::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)",
            Ease::Power3Out => "cubic-bezier(0.22, 1, 0.36, 1)",
            Ease::SineInOut => "cubic-bezier(0.37, 0, 0.63, 1)",
            Ease::ElasticOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    PlayOnce,
    Replay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mount {
    OnScroll,
    /// Above the fold: reveal right after mount regardless of scroll.
    OnMount,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub from: VisualState,
    pub to: VisualState,
    /// Seconds.
    pub duration: f64,
    pub delay: f64,
    pub stagger: f64,
    pub ease: Ease,
    /// Trigger line, written as `"<element edge> <viewport position>"`.
    pub start: &'static str,
    pub policy: Policy,
    pub mount: Mount,
}

impl RevealConfig {
    pub const fn rise(y: f64, duration: f64, start: &'static str) -> Self {
        RevealConfig {
            from: VisualState {
                opacity: 0.0,
                y,
                ..VisualState::VISIBLE
            },
            to: VisualState::VISIBLE,
            duration,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::Power2Out,
            start,
            policy: Policy::PlayOnce,
            mount: Mount::OnScroll,
        }
    }

    pub const fn staggered(self, stagger: f64) -> Self {
        RevealConfig { stagger, ..self }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        RevealConfig { delay, ..self }
    }

    pub const fn eased(self, ease: Ease) -> Self {
        RevealConfig { ease, ..self }
    }

    pub const fn from_state(self, from: VisualState) -> Self {
        RevealConfig { from, ..self }
    }

    pub const fn to_state(self, to: VisualState) -> Self {
        RevealConfig { to, ..self }
    }

    pub const fn replaying(self) -> Self {
        RevealConfig {
            policy: Policy::Replay,
            ..self
        }
    }

    pub const fn on_mount(self) -> Self {
        RevealConfig {
            mount: Mount::OnMount,
            ..self
        }
    }

    pub fn threshold(&self) -> Threshold {
        match self.start.parse() {
            Ok(threshold) => threshold,
            Err(err) => {
                log::warn!("bad reveal start {:?}: {}", self.start, err);
                Threshold::default()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTiming {
    pub start: f64,
    pub end: f64,
}

/// Start and end times (seconds after the trigger fires) for `count` items.
pub fn schedule(config: &RevealConfig, count: usize) -> Vec<ItemTiming> {
    (0..count)
        .map(|index| {
            let start = config.delay + index as f64 * config.stagger;
            ItemTiming {
                start,
                end: start + config.duration,
            }
        })
        .collect()
}

pub fn group_styles(config: &RevealConfig, count: usize, revealed: bool) -> Vec<String> {
    schedule(config, count)
        .iter()
        .map(|timing| item_style(config, timing, revealed))
        .collect()
}

pub fn lone_style(config: &RevealConfig, revealed: bool) -> String {
    group_styles(config, 1, revealed).concat()
}

// Hiding reverses with no stagger so a replayed group collapses at once.
fn item_style(config: &RevealConfig, timing: &ItemTiming, revealed: bool) -> String {
    let (state, delay) = if revealed {
        (&config.to, (timing.start * 1000.0).round() / 1000.0)
    } else {
        (&config.from, 0.0)
    };
    let ease = config.ease.css();
    format!(
        "opacity: {}; transform: {}; transition: opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s; will-change: opacity, transform;",
        state.opacity,
        state.transform(),
        d = config.duration,
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriggerState {
    revealed: bool,
}

impl TriggerState {
    pub fn observe(&mut self, crossed: bool, policy: Policy) -> bool {
        self.revealed = match policy {
            Policy::PlayOnce => self.revealed || crossed,
            Policy::Replay => crossed,
        };
        self.revealed
    }

    pub fn is_settled(&self, policy: Policy) -> bool {
        self.revealed && policy == Policy::PlayOnce
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold {
    pub edge: Edge,
    /// Fraction of viewport height from its top, 0.0..=1.0.
    pub line: f64,
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold {
            edge: Edge::Top,
            line: 0.8,
        }
    }
}

impl Threshold {
    /// `element_top` is relative to the viewport, as from `getBoundingClientRect`.
    pub fn crosses(&self, element_top: f64, element_height: f64, viewport_height: f64) -> bool {
        let edge_y = element_top + element_height * self.edge.fraction();
        edge_y <= viewport_height * self.line
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    MissingPart,
    UnknownEdge(String),
    BadPosition(String),
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdError::MissingPart => write!(f, "expected \"<edge> <position>\""),
            ThresholdError::UnknownEdge(edge) => write!(f, "unknown edge {edge:?}"),
            ThresholdError::BadPosition(pos) => write!(f, "bad viewport position {pos:?}"),
        }
    }
}

impl std::error::Error for ThresholdError {}

fn parse_edge(word: &str) -> Option<Edge> {
    match word {
        "top" => Some(Edge::Top),
        "center" => Some(Edge::Center),
        "bottom" => Some(Edge::Bottom),
        _ => None,
    }
}

impl FromStr for Threshold {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(edge), Some(position), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ThresholdError::MissingPart);
        };
        let edge = parse_edge(edge).ok_or_else(|| ThresholdError::UnknownEdge(edge.to_string()))?;
        let line = match parse_edge(position) {
            Some(keyword) => keyword.fraction(),
            None => {
                let percent = position
                    .strip_suffix('%')
                    .and_then(|p| p.parse::<f64>().ok())
                    .filter(|p| (0.0..=100.0).contains(p))
                    .ok_or_else(|| ThresholdError::BadPosition(position.to_string()))?;
                percent / 100.0
            }
        };
        Ok(Threshold { edge, line })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: RevealConfig = RevealConfig::rise(50.0, 0.8, "top 70%").staggered(0.2);

    #[test]
    fn staggered_items_start_one_interval_apart() {
        let timings = schedule(&CARDS, 4);
        assert_eq!(timings.len(), 4);
        for pair in timings.windows(2) {
            assert!((pair[1].start - pair[0].start - 0.2).abs() < 1e-9);
        }
        let last = timings.last().unwrap();
        assert!((last.end - (last.start + 0.8)).abs() < 1e-9);
        assert!((last.end - 1.4).abs() < 1e-9);
    }

    #[test]
    fn delay_shifts_the_whole_group() {
        let config = CARDS.delayed(0.5);
        let timings = schedule(&config, 2);
        assert!((timings[0].start - 0.5).abs() < 1e-9);
        assert!((timings[1].start - 0.7).abs() < 1e-9);
    }

    #[test]
    fn empty_group_has_nothing_to_render() {
        assert!(schedule(&CARDS, 0).is_empty());
        assert!(group_styles(&CARDS, 0, true).is_empty());
    }

    #[test]
    fn group_styles_give_each_item_a_distinct_delay() {
        let styles = group_styles(&CARDS, 4, true);
        assert_eq!(styles.len(), 4);
        for (style, delay) in styles.iter().zip(["0", "0.2", "0.4", "0.6"]) {
            let transition = format!("opacity 0.8s {} {}s,", Ease::Power2Out.css(), delay);
            assert!(style.contains(&transition), "{style}");
        }
        for (i, a) in styles.iter().enumerate() {
            assert!(styles[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn lone_style_matches_first_group_item() {
        assert_eq!(lone_style(&CARDS, true), group_styles(&CARDS, 3, true)[0]);
        assert_eq!(lone_style(&CARDS, false), group_styles(&CARDS, 3, false)[0]);
    }

    #[test]
    fn parses_trigger_lines() {
        let t: Threshold = "top 80%".parse().unwrap();
        assert_eq!(t.edge, Edge::Top);
        assert!((t.line - 0.8).abs() < 1e-9);

        let t: Threshold = "center bottom".parse().unwrap();
        assert_eq!(t.edge, Edge::Center);
        assert_eq!(t.line, 1.0);

        assert_eq!("top".parse::<Threshold>(), Err(ThresholdError::MissingPart));
        assert_eq!(
            "left 50%".parse::<Threshold>(),
            Err(ThresholdError::UnknownEdge("left".into()))
        );
        assert_eq!(
            "top 120%".parse::<Threshold>(),
            Err(ThresholdError::BadPosition("120%".into()))
        );
    }

    #[test]
    fn malformed_start_falls_back_to_default_line() {
        let config = RevealConfig::rise(10.0, 1.0, "nonsense");
        assert_eq!(config.threshold(), Threshold::default());
    }

    #[test]
    fn crossing_compares_element_edge_with_viewport_line() {
        let t: Threshold = "top 80%".parse().unwrap();
        // viewport 1000px, line at 800px
        assert!(!t.crosses(900.0, 300.0, 1000.0));
        assert!(t.crosses(800.0, 300.0, 1000.0));
        assert!(t.crosses(-50.0, 300.0, 1000.0));

        let t: Threshold = "bottom bottom".parse().unwrap();
        assert!(!t.crosses(800.0, 300.0, 1000.0));
        assert!(t.crosses(700.0, 300.0, 1000.0));
    }

    #[test]
    fn play_once_never_reverses() {
        let mut state = TriggerState::default();
        assert!(!state.observe(false, Policy::PlayOnce));
        assert!(state.observe(true, Policy::PlayOnce));
        assert!(state.is_settled(Policy::PlayOnce));
        assert!(state.observe(false, Policy::PlayOnce));
    }

    #[test]
    fn replay_follows_the_line_both_ways() {
        let mut state = TriggerState::default();
        assert!(state.observe(true, Policy::Replay));
        assert!(!state.is_settled(Policy::Replay));
        assert!(!state.observe(false, Policy::Replay));
        assert!(state.observe(true, Policy::Replay));
    }

    #[test]
    fn styles_carry_stagger_only_when_revealing() {
        let shown = &group_styles(&CARDS, 3, true)[2];
        assert!(shown.starts_with("opacity: 1;"));
        assert!(shown.contains("translate(0px, 0px)"));
        assert!(shown.contains("0.8s"));
        assert!(shown.contains(" 0.4s"));

        let hidden = &group_styles(&CARDS, 3, false)[2];
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("translate(0px, 50px)"));
        assert!(hidden.contains(" 0s"));
    }
}
