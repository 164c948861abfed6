//! Synthetic copy of the opcode reference page used by the tests.
//!
//! The layout follows the real page: a decoy navigation table, the unprefixed
//! table (no id), then the CB-prefixed table. Each table starts with a legend
//! row and each row with a legend cell.
use std::fmt::Write;

const REGS: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
const CB_OPS: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];
/// opcodes that have no instruction in the unprefixed table
pub const BLANK: [u8; 11] = [0xd3, 0xdb, 0xdd, 0xe3, 0xe4, 0xeb, 0xec, 0xed, 0xf4, 0xfc, 0xfd];

/// (text, size, cycles, flags) for an unprefixed opcode, None for a blank cell
pub fn unprefixed(op: u8) -> Option<(String, u8, &'static str, &'static str)> {
    let (text, size, cycles, flags) = match op {
        0x00 => ("NOP", 1, "4", "- - - -"),
        0x01 => ("LD BC,d16", 3, "12", "- - - -"),
        0x06 => ("LD B,d8", 2, "8", "- - - -"),
        0x08 => ("LD (a16),SP", 3, "20", "- - - -"),
        0x10 => ("STOP 0", 2, "4", "- - - -"),
        0x18 => ("JR r8", 2, "12", "- - - -"),
        0x20 => ("JR NZ,r8", 2, "12/8", "- - - -"),
        0x3e => ("LD A,d8", 2, "8", "- - - -"),
        0x76 => ("HALT", 1, "4", "- - - -"),
        0xc2 => ("JP NZ,a16", 3, "16/12", "- - - -"),
        0xc3 => ("JP a16", 3, "16", "- - - -"),
        0xc6 => ("ADD A,d8", 2, "8", "Z 0 H C"),
        0xc7 => ("RST 00H", 1, "16", "- - - -"),
        0xc9 => ("RET", 1, "16", "- - - -"),
        0xcb => ("PREFIX CB", 1, "4", "- - - -"),
        0xcd => ("CALL a16", 3, "24", "- - - -"),
        0xd9 => ("RETI", 1, "16", "- - - -"),
        0xe0 => ("LDH (a8),A", 2, "12", "- - - -"),
        0xe9 => ("JP (HL)", 1, "4", "- - - -"),
        0xea => ("LD (a16),A", 3, "16", "- - - -"),
        0xf3 => ("DI", 1, "4", "- - - -"),
        0xf8 => ("LD HL,SP+r8", 2, "12", "0 0 H C"),
        0xfa => ("LD A,(a16)", 3, "16", "- - - -"),
        0xfb => ("EI", 1, "4", "- - - -"),
        0xff => ("RST 38H", 1, "16", "- - - -"),
        op if BLANK.contains(&op) => return None,
        op => {
            return Some((
                format!("LD {},{}", REGS[(op as usize >> 3) & 7], REGS[op as usize & 7]),
                1,
                "4",
                "- - - -",
            ))
        }
    };
    Some((text.to_string(), size, cycles, flags))
}

pub fn prefixed(op: u8) -> (String, u8, &'static str, &'static str) {
    let reg = REGS[op as usize & 7];
    let bit = (op as usize >> 3) & 7;
    let text = match op >> 6 {
        0 => format!("{} {}", CB_OPS[bit], reg),
        1 => format!("BIT {},{}", bit, reg),
        2 => format!("RES {},{}", bit, reg),
        _ => format!("SET {},{}", bit, reg),
    };
    (text, 2, "8", "Z 0 0 C")
}

fn cell(text: &str, size: u8, cycles: &str, flags: &str) -> String {
    format!("<td class=\"x\">{}<br>{}&nbsp;&nbsp;{}<br>{}</td>", text, size, cycles, flags)
}

/// One table's rows, `cells` yielding the html for opcode 0x00..=0xff in order.
pub fn table(attrs: &str, cells: impl Fn(u8) -> String) -> String {
    let mut html = format!("<table{}>\n<tr><th>&nbsp;</th>", attrs);
    for col in 0..16 {
        _ = write!(html, "<th>x{:X}</th>", col);
    }
    html.push_str("</tr>\n");
    for row in 0..16u8 {
        _ = write!(html, "<tr><th>{:X}x</th>", row);
        for col in 0..16u8 {
            html.push_str(&cells(row << 4 | col));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

pub fn unprefixed_cell(op: u8) -> String {
    match unprefixed(op) {
        Some((text, size, cycles, flags)) => cell(&text, size, cycles, flags),
        None => "<td>&nbsp;</td>".to_string(),
    }
}

pub fn prefixed_cell(op: u8) -> String {
    let (text, size, cycles, flags) = prefixed(op);
    cell(&text, size, cycles, flags)
}

/// Wrap tables in the page boilerplate, after a navigation table that must be ignored.
pub fn page(tables: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><title>Gameboy CPU (LR35902) instruction set</title>\
         <style>td {{ width: 6%; }}</style></head><body>\n\
         <table id=\"nav\"><tr><td>Unprefixed</td><td>CB prefixed</td></tr></table>\n{}\
         </body></html>\n",
        tables
    )
}

pub fn document() -> String {
    page(&format!(
        "{}{}",
        table("", unprefixed_cell),
        table(" id=\"cbprefixed\"", prefixed_cell)
    ))
}
