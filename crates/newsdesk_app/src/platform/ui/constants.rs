/// Columns used when wrapping card text.
pub const CARD_WIDTH: usize = 72;
/// Default number of card lines visible at once.
pub const DEFAULT_ROWS: usize = 18;
/// Lines moved by a single scroll command without a count.
pub const SCROLL_STEP: usize = 4;

pub const WELCOME_TITLE: &str = "Welcome to newsdesk";
pub const WELCOME_TAGLINES: [&str; 2] = ["Stay Informed.", "Discover News Instantly."];

/// Glyph drawn in place of text for cards that have not scrolled into view yet.
pub const UNREVEALED_FILL: char = '\u{2591}';

pub const HELP_TEXT: &str = "\
commands:
  /<text> | search <text>   search all articles (empty text returns to the category)
  clear                     clear the search
  cat <name>                show top headlines for a category
  page <n> | <n>            jump to a page
  n | next, p | prev        next / previous page
  r | retry                 fetch the current page again
  j | down [lines]          scroll down
  k | up [lines]            scroll up
  h | help                  show this help
  q | quit                  exit";
