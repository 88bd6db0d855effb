#![allow(clippy::print_stdout)]

use motley_core::{id_html_color, name_color};
use uuid::Uuid;

fn main() {
    for raw in [
        0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8_u128,
        0x9073_926f_66aa_4c6e_8967_7f2e_0e47_03af,
        0,
    ] {
        let id = Uuid::from_u128(raw);
        let (hex, is_dark) = id_html_color(id);
        let text = if is_dark { "light text" } else { "dark text" };
        println!("{id} -> {hex} ({text})");
    }

    for name in ["alice", "bob", "mallory"] {
        let tag = name_color(name);
        let text = if tag.is_dark { "light text" } else { "dark text" };
        println!("{name:>36} -> {} ({text})", tag.html());
    }
}
