// DOM hooks, copy and palette for the web frontend.

// Elements provided by index.html
pub const ROOT_ID: &str = "app-root";
pub const CONFETTI_CANVAS_ID: &str = "confetti-canvas";

// Elements rendered by the crate
pub const HEARTS_LAYER_ID: &str = "hearts-layer";
pub const CARD_ID: &str = "card";
pub const PANE_ID: &str = "card-pane";
pub const BUTTON_ZONE_ID: &str = "button-zone";
pub const YES_BUTTON_ID: &str = "yes-button";
pub const NO_BUTTON_ID: &str = "no-button";
pub const RISE_STYLE_ID: &str = "rise-keyframes";

// Pane transition classes and timing
pub const CLASS_ENTERING: &str = "pane-enter";
pub const CLASS_EXITING: &str = "pane-exit";
pub const PANE_EXIT_MS: i32 = 300;

// Copy
pub const DOCUMENT_TITLE: &str = "Be Mine Forever ❤️";
pub const QUESTION_TITLE: &str = "Will you be my Valentine?";
pub const QUESTION_SUBTITLE: &str = "You&apos;re the missing pixel in my life! 👾";
pub const YES_LABEL: &str = "Yes! 💖";
pub const NO_LABEL: &str = "No 😢";
pub const CELEBRATION_TITLE: &str = "I Knew it! ❤️";
pub const CELEBRATION_SUBTITLE: &str = "You make my heart skip a beat!";
pub const CELEBRATION_NOTE: &str = "You are the best thing that ever happened to me! ❤️";
pub const CELEBRATION_FOOTER: &str = "Our song is just beginning";
pub const PAGE_FOOTER: &str = "MADE WITH LOVE ❤️";

// Palette
pub const BACKDROP_COLOR: &str = "#fff5f7";
pub const HEART_FILL: &str = "#ff4d6d";

// Heart glyph as inline SVG path (24x24 viewbox)
pub const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";
