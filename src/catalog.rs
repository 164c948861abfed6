//! Building the catalog: every cell of both tables, in document order, split
//! into two pages of 256 opcodes.
//!
//! Which page an opcode lands on is decided purely by how many cells came
//! before it, never by the table it was read from or by its mnemonic. The
//! position is tracked by an explicit [`BuilderState`] that is advanced once
//! per cell, blank cells included.
use super::cell;
use super::opcode::{Opcode, Page};
use super::table::{CellPos, TableSource, LEGEND_CELLS, LEGEND_ROWS};
use super::*;
use std::fmt;

pub const PAGE_SIZE: usize = 256;

/// The slot the next opcode will be written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuilderState {
    pub page: Page,
    pub index_in_page: usize,
}
impl BuilderState {
    pub fn new() -> Self {
        BuilderState {
            page: Page::Unprefixed,
            index_in_page: 0,
        }
    }
    /// The slot after this one; None once the prefixed page is full.
    pub fn advance(self) -> Option<Self> {
        let next = self.index_in_page + 1;
        match (self.page, next) {
            (_, n) if n < PAGE_SIZE => Some(BuilderState {
                page: self.page,
                index_in_page: n,
            }),
            (Page::Unprefixed, _) => Some(BuilderState {
                page: Page::Prefixed,
                index_in_page: 0,
            }),
            (Page::Prefixed, _) => None,
        }
    }
}

/// Both opcode pages, exactly PAGE_SIZE entries each.
#[derive(Debug)]
pub struct Catalog {
    pages: [Vec<Opcode>; 2],
}
impl Catalog {
    pub fn page(&self, page: Page) -> &[Opcode] { &self.pages[page.ordinal()] }
    pub fn len(&self) -> usize { self.pages.iter().map(Vec::len).sum() }
    /// every entry as (page, index within page, opcode), unprefixed page first
    pub fn entries(&self) -> impl Iterator<Item = (Page, usize, &Opcode)> + '_ {
        Page::ALL
            .into_iter()
            .flat_map(move |p| self.page(p).iter().enumerate().map(move |(i, op)| (p, i, op)))
    }
}
impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for page in Page::ALL {
            writeln!(f, "{} page:", page)?;
            for (i, op) in self.page(page).iter().enumerate() {
                if op.is_placeholder() {
                    writeln!(f, "  {:02X}  -", i)?;
                } else {
                    writeln!(f, "  {:02X}  {}{}", i, op, if op.is_jump() { "  jump" } else { "" })?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct CatalogBuilder {
    state: Option<BuilderState>, // None once both pages are full
    pages: [Vec<Opcode>; 2],
}
impl CatalogBuilder {
    pub fn new() -> Self {
        CatalogBuilder {
            state: Some(BuilderState::new()),
            pages: [Vec::with_capacity(PAGE_SIZE), Vec::with_capacity(PAGE_SIZE)],
        }
    }
    /// Read both tables from `source`, skipping legend rows and legend cells.
    pub fn build_from(source: &dyn TableSource) -> Result<Catalog, Error> {
        let mut builder = CatalogBuilder::new();
        for table in Page::ALL {
            for (r, row) in source.rows(table)?.iter().enumerate().skip(LEGEND_ROWS) {
                for (c, cell) in row.iter().enumerate().skip(LEGEND_CELLS) {
                    let pos = CellPos { table, row: r, col: c };
                    let slot = builder.push(cell::parse_cell(cell, pos)?)?;
                    verbose_println!("{} {:02X}: {}", slot.page, slot.index_in_page, builder.last());
                }
            }
        }
        builder.finish()
    }
    /// Append an opcode at the current slot and return the slot it went to.
    pub fn push(&mut self, op: Opcode) -> Result<BuilderState, Error> {
        let slot = self
            .state
            .ok_or_else(|| layout_err!("more than {} cells in the opcode tables", 2 * PAGE_SIZE))?;
        self.pages[slot.page.ordinal()].push(op);
        self.state = slot.advance();
        Ok(slot)
    }
    fn last(&self) -> String {
        self.pages
            .iter()
            .rev()
            .find_map(|p| p.last())
            .map_or_else(String::new, |op| op.to_string())
    }
    pub fn finish(self) -> Result<Catalog, Error> {
        if let Some(next) = self.state {
            return Err(layout_err!(
                "opcode tables ended at {} page index {:02X}; expected {} cells per page",
                next.page,
                next.index_in_page,
                PAGE_SIZE
            ));
        }
        Ok(Catalog { pages: self.pages })
    }
}

#[cfg(test)]
mod tests {
    use super::super::opcode::Format;
    use super::super::table::{Cell, Row};
    use super::*;

    /// rows handed over directly, no document involved
    struct Rows {
        unprefixed: Vec<Row>,
        prefixed: Vec<Row>,
    }
    impl TableSource for Rows {
        fn unprefixed_rows(&self) -> Result<&[Row], Error> { Ok(&self.unprefixed) }
        fn prefixed_rows(&self) -> Result<&[Row], Error> { Ok(&self.prefixed) }
    }

    fn nop() -> Cell { Cell::new(["NOP", "1  4"]) }

    /// legend row plus `rows` rows of a legend cell and `cols` cells from `cell`
    fn grid(rows: usize, cols: usize, cell: impl Fn(usize) -> Cell) -> Vec<Row> {
        let mut grid = vec![vec![Cell::new(["x0"]); cols + 1]];
        for r in 0..rows {
            let mut row = vec![Cell::new([format!("{:X}x", r)])];
            row.extend((0..cols).map(|c| cell(r * cols + c)));
            grid.push(row);
        }
        grid
    }

    #[test]
    fn state_switches_page_at_256() {
        let mut state = BuilderState::new();
        for i in 1..PAGE_SIZE {
            state = state.advance().unwrap();
            assert_eq!(state, BuilderState { page: Page::Unprefixed, index_in_page: i });
        }
        state = state.advance().unwrap();
        assert_eq!(state, BuilderState { page: Page::Prefixed, index_in_page: 0 });
        for _ in 1..PAGE_SIZE {
            state = state.advance().unwrap();
        }
        assert_eq!(state.index_in_page, PAGE_SIZE - 1);
        assert_eq!(state.advance(), None);
    }

    #[test]
    fn reference_layout() -> Result<(), Error> {
        let source = table::HtmlTableSource::locate(html::Document::parse(&fixture::document()), "", "RLC B")?;
        let catalog = CatalogBuilder::build_from(&source)?;
        assert_eq!(catalog.len(), 2 * PAGE_SIZE);
        for page in Page::ALL {
            assert_eq!(catalog.page(page).len(), PAGE_SIZE);
        }
        // indices form an unbroken run on each page
        let mut expected = Page::ALL.into_iter().flat_map(|p| (0..PAGE_SIZE).map(move |i| (p, i)));
        for (page, i, _) in catalog.entries() {
            assert_eq!(expected.next(), Some((page, i)));
        }
        assert_eq!(expected.next(), None);

        let un = catalog.page(Page::Unprefixed);
        for op in 0..=255u8 {
            let entry = &un[op as usize];
            match fixture::unprefixed(op) {
                None => assert!(entry.is_placeholder(), "{:02X} should be a placeholder", op),
                Some((text, size, _, _)) => {
                    assert_eq!(Some(entry.mnemonic.as_str()), text.split(' ').next());
                    assert_eq!(entry.size, size);
                }
            }
        }
        assert_eq!((un[0x01].operand.as_str(), un[0x01].format), ("BC", Format::X4));
        assert_eq!((un[0x08].operand.as_str(), un[0x08].format), ("SP", Format::X4));
        assert_eq!((un[0x3e].operand.as_str(), un[0x3e].format), ("A", Format::X2));
        let cb = catalog.page(Page::Prefixed);
        assert_eq!((cb[0x00].mnemonic.as_str(), cb[0x00].operand.as_str()), ("RLC", "B"));
        assert_eq!((cb[0x37].mnemonic.as_str(), cb[0x37].operand.as_str()), ("SWAP", "A"));
        assert_eq!((cb[0xff].mnemonic.as_str(), cb[0xff].operand.as_str()), ("SET", "7,A"));
        Ok(())
    }

    #[test]
    fn jumps_are_exactly_the_control_flow_mnemonics() -> Result<(), Error> {
        let source = table::HtmlTableSource::locate(html::Document::parse(&fixture::document()), "", "RLC B")?;
        let catalog = CatalogBuilder::build_from(&source)?;
        let jumps: Vec<(Page, usize)> = catalog
            .entries()
            .filter(|(_, _, op)| op.is_jump())
            .map(|(p, i, _)| (p, i))
            .collect();
        let expected: Vec<(Page, usize)> = [0x18, 0x20, 0xc2, 0xc3, 0xc7, 0xc9, 0xcd, 0xd9, 0xe9, 0xff]
            .into_iter()
            .map(|i| (Page::Unprefixed, i))
            .collect();
        assert_eq!(jumps, expected);
        Ok(())
    }

    #[test]
    fn blank_cell_takes_one_slot() -> Result<(), Error> {
        let cell = |i: usize| if i == 5 { Cell::new(["\u{a0}"]) } else if i == 6 { Cell::default() } else { nop() };
        let source = Rows {
            unprefixed: grid(16, 16, cell),
            prefixed: grid(16, 16, |_| nop()),
        };
        let catalog = CatalogBuilder::build_from(&source)?;
        let un = catalog.page(Page::Unprefixed);
        assert_eq!(un.len(), PAGE_SIZE);
        assert!(un[5].is_placeholder() && un[6].is_placeholder());
        assert!(!un[4].is_placeholder() && !un[7].is_placeholder());
        Ok(())
    }

    #[test]
    fn pages_follow_cell_count_not_tables() -> Result<(), Error> {
        // 8 columns x 24 rows + 8 x 40: the unprefixed table spills onto the prefixed page
        let source = Rows {
            unprefixed: grid(40, 8, |_| nop()),
            prefixed: grid(24, 8, |_| Cell::new(["RLC B", "2  8"])),
        };
        let catalog = CatalogBuilder::build_from(&source)?;
        let cb = catalog.page(Page::Prefixed);
        assert_eq!(cb.len(), PAGE_SIZE);
        assert_eq!(cb[63].mnemonic, "NOP");
        assert_eq!(cb[64].mnemonic, "RLC");
        Ok(())
    }

    #[test]
    fn short_tables_are_a_layout_error() {
        let source = Rows {
            unprefixed: grid(16, 16, |_| nop()),
            prefixed: grid(15, 16, |_| nop()),
        };
        let e = CatalogBuilder::build_from(&source).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Layout);
    }

    #[test]
    fn long_tables_are_a_layout_error() {
        let source = Rows {
            unprefixed: grid(16, 16, |_| nop()),
            prefixed: grid(17, 16, |_| nop()),
        };
        let e = CatalogBuilder::build_from(&source).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Layout);
    }

    #[test]
    fn malformed_cell_reports_position() {
        let source = Rows {
            unprefixed: grid(16, 16, |i| if i == 0x23 { Cell::new(["INC HL", "?"]) } else { nop() }),
            prefixed: grid(16, 16, |_| nop()),
        };
        let e = CatalogBuilder::build_from(&source).unwrap_err();
        assert_eq!(e.kind, ErrorKind::Malformed);
        // legend row and legend cell shift the position by one each
        assert_eq!(e.ctx, Some(CellPos { table: Page::Unprefixed, row: 3, col: 4 }));
    }
}
