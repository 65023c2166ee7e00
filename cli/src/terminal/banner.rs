use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::print::{self, TOTAL_WIDTH};

const ART: &str = r#"
   ____                       _   _             _
  / ___|  ___ ___  _ __   ___| | | |_   _ _ __ | |_ ___ _ __
  \___ \ / __/ _ \| '_ \ / _ \ |_| | | | | '_ \| __/ _ \ '__|
   ___) | (_| (_) | |_) |  __/  _  | |_| | | | | ||  __/ |
  |____/ \___\___/| .__/ \___|_| |_|\__,_|_| |_|\__\___|_|
                  |_|
"#;

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    print::print(&format!("{}", ART.color(colors::PRIMARY).bold()));

    let text_content: String = format!("⟦ SCOPEHUNTER v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .color(colors::SEPARATOR);
    print::print(&format!("{}{}{}", sep, text, sep));
    print::centerln(&format!(
        "{}",
        "Network Access Verification Tool".color(colors::MUTED)
    ));
    print::blank();
}
