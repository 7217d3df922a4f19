//! Block segmentation: a fold over the document lines.
//!
//! Only lines inside the transaction section are considered. A date-anchor
//! line opens a new block and the following lines up to the next anchor are
//! its continuation. Noise lines are dropped before any of that, in or out
//! of the section.

use log::{debug, trace};
use mutasi_core::TransactionBlock;

use crate::layout::DocumentText;
use crate::registry::CompiledProfile;

#[derive(Debug, Default)]
pub struct SegmentState {
    in_section: bool,
    finished: bool,
    current: Option<TransactionBlock>,
    blocks: Vec<TransactionBlock>,
}

impl SegmentState {
    /// Consume one trimmed, non-empty line.
    pub fn step(mut self, profile: &CompiledProfile, line: &str) -> Self {
        if self.finished {
            return self;
        }

        if profile.is_section_end(line) {
            self.flush();
            self.in_section = false;
            self.finished = profile.profile().end_is_final;
            debug!("{}: section closed by '{}'", profile.variant(), line);
            return self;
        }

        if profile.is_section_start(line) {
            self.in_section = true;
            return self;
        }

        if profile.is_noise(line) {
            trace!("{}: noise '{}'", profile.variant(), line);
            return self;
        }

        let may_open = self.in_section || profile.opens_on_anchor();
        if may_open && profile.date_anchor(line).is_some() {
            self.flush();
            self.in_section = true;
            self.current = Some(TransactionBlock::new(line));
            return self;
        }

        if self.in_section {
            if let Some(block) = self.current.as_mut() {
                block.push(line);
            }
        }
        self
    }

    pub fn finish(mut self) -> Vec<TransactionBlock> {
        self.flush();
        self.blocks
    }

    fn flush(&mut self) {
        if let Some(block) = self.current.take() {
            self.blocks.push(block);
        }
    }
}

pub fn segment(profile: &CompiledProfile, doc: &DocumentText) -> Vec<TransactionBlock> {
    doc.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(SegmentState::default(), |state, line| state.step(profile, line))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use mutasi_core::IssuerVariant;

    fn blocks(variant: IssuerVariant, text: &str) -> Vec<TransactionBlock> {
        let reg = Registry::new().unwrap();
        segment(reg.get(variant).unwrap(), &DocumentText::from(text))
    }

    #[test]
    fn test_continuation_lines_join_current_block() {
        let b = blocks(
            IssuerVariant::Bni,
            "01 Jan 2024 TRANSFER\n  KE BUDI  \n\n08:00:00 WIB -1,00 9,00\n02 Jan 2024 X +1,00 10,00\n",
        );
        assert_eq!(b.len(), 2);
        assert_eq!(b[0].lines(), ["01 Jan 2024 TRANSFER", "KE BUDI", "08:00:00 WIB -1,00 9,00"]);
        assert_eq!(b[1].lines().len(), 1);
    }

    #[test]
    fn test_lines_before_first_anchor_ignored() {
        let b = blocks(IssuerVariant::Bni, "ORPHAN LINE\n01 Jan 2024 A +1,00 1,00\n");
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].first_line(), "01 Jan 2024 A +1,00 1,00");
    }

    #[test]
    fn test_final_end_marker_stops_scan() {
        let b = blocks(
            IssuerVariant::Bni,
            "01 Jan 2024 A +1,00 1,00\nSaldo Akhir 1,00\n02 Jan 2024 B +1,00 2,00\n",
        );
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_section_reopens_after_non_final_end() {
        let text = "\
Transaction Date Description
01/02/24 A 1.00 0.00 9.00
Opening Balance
02/02/24 OUTSIDE 1.00 0.00 8.00
Transaction Date Description
03/02/24 B 1.00 0.00 7.00
";
        let b = blocks(IssuerVariant::Bri, text);
        let firsts: Vec<_> = b.iter().map(|b| b.first_line().to_string()).collect();
        assert_eq!(firsts, ["01/02/24 A 1.00 0.00 9.00", "03/02/24 B 1.00 0.00 7.00"]);
    }

    #[test]
    fn test_noise_dropped_inside_block() {
        let text = "\
Saldo Awal 10,00
02/01/2024 TRANSFER KE
Halaman 1 dari 2
Tanggal Keterangan Debit Kredit Saldo
BUDI 9,00
";
        let b = blocks(IssuerVariant::Mandiri, text);
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].joined(), "02/01/2024 TRANSFER KE BUDI 9,00");
    }

    #[test]
    fn test_block_count_bounded_by_anchor_lines() {
        let text = "\
Transaction Date
01/02/24 A 1.00 0.00 9.00
noise-free continuation
02/02/24 B
1 of 2
03/02/24 C 1.00 0.00 7.00
Opening Balance
";
        let reg = Registry::new().unwrap();
        let bri = reg.get(IssuerVariant::Bri).unwrap();
        let anchors = text.lines().filter(|l| bri.date_anchor(l).is_some()).count();
        let b = segment(bri, &DocumentText::from(text));
        assert!(b.len() <= anchors);
        assert_eq!(b.len(), 3);
    }
}
