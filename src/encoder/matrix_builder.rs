//! Matrix construction and mask selection
//!
//! The function patterns are painted once per version; every mask candidate
//! starts from a clone of them, receives the data bits and the format and
//! version words, and is scored. The winner is rendered again and returned.

use rayon::prelude::*;

use crate::encoder::config;
use crate::encoder::format::FormatInfo;
use crate::encoder::function_mask::FunctionMask;
use crate::encoder::penalty::penalty_score;
use crate::encoder::placement::place_data;
use crate::encoder::template::QrData;
use crate::encoder::version::VersionInfo;
use crate::models::{BitMatrix, MaskPattern, QrMatrix};

/// Builds the final symbol for one filled template
pub struct MatrixBuilder<'a> {
    data: &'a QrData,
    func: FunctionMask,
}

impl<'a> MatrixBuilder<'a> {
    /// Paint the function patterns for the template's version
    pub fn new(data: &'a QrData) -> Self {
        Self {
            data,
            func: FunctionMask::new(data.version),
        }
    }

    /// Full symbol under one mask
    pub fn render(&self, mask: MaskPattern) -> BitMatrix {
        let mut modules = self.func.modules().clone();
        place_data(&mut modules, &self.func, self.data, mask);
        FormatInfo::write(&mut modules, self.data.ec_level, mask);
        VersionInfo::write(&mut modules, self.data.version);
        modules
    }

    /// Penalty of every mask, in mask index order
    pub fn score_all(&self) -> Vec<(MaskPattern, u32)> {
        let score = |&mask: &MaskPattern| (mask, penalty_score(&self.render(mask)));
        let parallel = config::parallel_mask_search()
            && self.data.version.number() >= config::parallel_min_version();
        if parallel {
            MaskPattern::ALL.par_iter().map(score).collect()
        } else {
            MaskPattern::ALL.iter().map(score).collect()
        }
    }

    /// Lowest-penalty mask; ties go to the lowest index
    pub fn best_mask(&self) -> (MaskPattern, u32) {
        self.score_all()
            .into_iter()
            .inspect(|(mask, penalty)| {
                log::trace!("version {} mask {}: penalty {penalty}", self.data.version, mask.index())
            })
            .fold((MaskPattern::Pattern0, u32::MAX), |best, candidate| {
                if candidate.1 < best.1 { candidate } else { best }
            })
    }

    /// Commit the chosen mask, or search for the best one when none is forced
    pub fn build(&self, forced: Option<MaskPattern>) -> QrMatrix {
        let (mask_pattern, modules, penalty) = match forced {
            Some(mask) => {
                let modules = self.render(mask);
                let penalty = penalty_score(&modules);
                (mask, modules, penalty)
            }
            None => {
                let (mask, penalty) = self.best_mask();
                (mask, self.render(mask), penalty)
            }
        };
        log::debug!(
            "committed version {}-{} mask {} (penalty {penalty}{})",
            self.data.version,
            self.data.ec_level,
            mask_pattern.index(),
            if forced.is_some() { ", forced" } else { "" }
        );

        QrMatrix {
            version: self.data.version,
            error_correction: self.data.ec_level,
            mask_pattern,
            penalty,
            modules,
        }
    }
}
