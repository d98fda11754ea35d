// Tue Jan 20 2026 - Alex

use crate::catalog::{CatalogEntry, StructCatalog};
use crate::compare::{ComparisonReport, NativeLayoutComparator};
use crate::extract::FieldExtractor;
use crate::layout::LayoutComputer;
use crate::utils::logging::ScopedTimer;
use crate::verify::error::VerifyError;
use crate::verify::outcome::TypeOutcome;
use crate::verify::report::VerificationReport;
use parking_lot::Mutex;
use rayon::prelude::*;

/// Drives the full pipeline for each catalog entry: declaration →
/// extraction → layout computation → comparison against the host layout.
/// Per-type verification is pure and embarrassingly parallel.
pub struct StructVerifier {
    extractor: FieldExtractor,
    computer: LayoutComputer,
    comparator: NativeLayoutComparator,
}

impl StructVerifier {
    pub fn new() -> Self {
        Self {
            extractor: FieldExtractor::new(),
            computer: LayoutComputer::new(),
            comparator: NativeLayoutComparator::new(),
        }
    }

    /// The fallible pipeline for one entry. Errors here are malformed
    /// declarations, not layout drift.
    pub fn check_entry(&self, entry: &CatalogEntry) -> Result<ComparisonReport, VerifyError> {
        let spec = self.extractor.extract(entry.decl())?;
        let layout = self.computer.compute(&spec)?;
        let report = self.comparator.compare(&layout, entry.actual())?;
        Ok(report)
    }

    /// Verifies one entry, folding any fatal error into an outcome so the
    /// sweep can continue past it.
    pub fn verify_entry(&self, entry: &CatalogEntry) -> TypeOutcome {
        log::debug!("verifying {}", entry.type_name());
        match self.check_entry(entry) {
            Ok(report) => {
                if !report.matches() {
                    log::warn!("layout drift in {}: {} finding(s)", entry.type_name(), report.finding_count());
                }
                TypeOutcome::Verified { report }
            }
            Err(error) => {
                log::warn!("verification aborted for {}: {}", entry.type_name(), error);
                TypeOutcome::Aborted {
                    type_name: entry.type_name().to_string(),
                    reason: error.to_string(),
                }
            }
        }
    }

    pub fn run(&self, catalog: &StructCatalog) -> VerificationReport {
        let _timer = ScopedTimer::new("verification sweep");
        let outcomes: Vec<TypeOutcome> = catalog.iter().map(|entry| self.verify_entry(entry)).collect();
        VerificationReport::from_outcomes(Self::sorted(outcomes))
    }

    /// Single-threaded enumeration feeding the rayon pool. The aggregated
    /// report is sorted by type name so parallel scheduling never changes
    /// the output.
    pub fn run_parallel(&self, catalog: &StructCatalog) -> VerificationReport {
        let _timer = ScopedTimer::new("parallel verification sweep");
        let entries: Vec<&CatalogEntry> = catalog.iter().collect();
        let outcomes = Mutex::new(Vec::with_capacity(entries.len()));

        entries.par_iter().for_each(|entry| {
            let outcome = self.verify_entry(entry);
            outcomes.lock().push(outcome);
        });

        VerificationReport::from_outcomes(Self::sorted(outcomes.into_inner()))
    }

    fn sorted(mut outcomes: Vec<TypeOutcome>) -> Vec<TypeOutcome> {
        outcomes.sort_by(|a, b| a.type_name().cmp(b.type_name()));
        outcomes
    }
}

impl Default for StructVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NativeStruct;
    use crate::compare::ActualLayout;
    use crate::extract::{NativeType, StructDecl};
    use crate::layout::PaddingRegion;
    use std::mem;

    // Explicit layout over 16 bytes; the declared offsets happen to agree
    // with what #[repr(C)] assigns, so the host layout matches them.
    #[repr(C)]
    struct ByteView {
        b0: u8,
        word0: i32,
        b1: u8,
        word1: i32,
    }

    impl NativeStruct for ByteView {
        fn type_name() -> &'static str {
            "ByteView"
        }

        fn decl() -> StructDecl {
            StructDecl::explicit("ByteView")
                .with_size(16)
                .prim_at("b0", NativeType::U8, 0)
                .prim_at("word0", NativeType::I32, 4)
                .prim_at("b1", NativeType::U8, 8)
                .prim_at("word1", NativeType::I32, 12)
        }

        fn actual() -> ActualLayout {
            ActualLayout::new("ByteView", mem::size_of::<ByteView>())
                .with_field("b0", mem::offset_of!(ByteView, b0))
                .with_field("word0", mem::offset_of!(ByteView, word0))
                .with_field("b1", mem::offset_of!(ByteView, b1))
                .with_field("word1", mem::offset_of!(ByteView, word1))
        }
    }

    #[repr(C, packed)]
    struct PackedCounters {
        tag: u8,
        count: i32,
        flag: u8,
        total: i32,
    }

    impl NativeStruct for PackedCounters {
        fn type_name() -> &'static str {
            "PackedCounters"
        }

        fn decl() -> StructDecl {
            StructDecl::sequential("PackedCounters")
                .with_pack(1)
                .prim("tag", NativeType::U8)
                .prim("count", NativeType::I32)
                .prim("flag", NativeType::U8)
                .prim("total", NativeType::I32)
        }

        fn actual() -> ActualLayout {
            ActualLayout::new("PackedCounters", mem::size_of::<PackedCounters>())
                .with_field("tag", mem::offset_of!(PackedCounters, tag))
                .with_field("count", mem::offset_of!(PackedCounters, count))
                .with_field("flag", mem::offset_of!(PackedCounters, flag))
                .with_field("total", mem::offset_of!(PackedCounters, total))
        }
    }

    #[repr(C)]
    struct ViewWithCounters {
        view: ByteView,
        counters: PackedCounters,
    }

    impl NativeStruct for ViewWithCounters {
        fn type_name() -> &'static str {
            "ViewWithCounters"
        }

        fn decl() -> StructDecl {
            StructDecl::sequential("ViewWithCounters")
                .nested("view", ByteView::decl())
                .nested("counters", PackedCounters::decl())
        }

        fn actual() -> ActualLayout {
            ActualLayout::new("ViewWithCounters", mem::size_of::<ViewWithCounters>())
                .with_field("view", mem::offset_of!(ViewWithCounters, view))
                .with_field("counters", mem::offset_of!(ViewWithCounters, counters))
        }
    }

    // A declaration the engine must refuse: the field type has no
    // blittable form.
    #[repr(C)]
    struct Poisoned {
        handle: *const (),
    }

    impl NativeStruct for Poisoned {
        fn type_name() -> &'static str {
            "Poisoned"
        }

        fn decl() -> StructDecl {
            StructDecl::sequential("Poisoned").opaque("handle", "ManagedHandle")
        }

        fn actual() -> ActualLayout {
            ActualLayout::new("Poisoned", mem::size_of::<Poisoned>())
                .with_field("handle", mem::offset_of!(Poisoned, handle))
        }
    }

    fn fixture_catalog() -> StructCatalog {
        let mut catalog = StructCatalog::new();
        catalog.register::<ByteView>();
        catalog.register::<PackedCounters>();
        catalog.register::<ViewWithCounters>();
        catalog
    }

    #[test]
    fn test_explicit_member_realigns_packed_neighbor() {
        // ByteView is 16 bytes with alignment 4; PackedCounters is 10
        // bytes with alignment 1. The outer struct inherits alignment 4
        // from the explicit member, so 26 bytes of fields round up to 28
        // with 2 bytes of padding.
        let verifier = StructVerifier::new();
        let extractor = FieldExtractor::new();
        let computer = LayoutComputer::new();

        let spec = extractor.extract(&ViewWithCounters::decl()).unwrap();
        let layout = computer.compute(&spec).unwrap();

        assert_eq!(layout.offset_of("view"), Some(0));
        assert_eq!(layout.offset_of("counters"), Some(16));
        assert_eq!(layout.size(), 28);
        assert_eq!(layout.alignment().as_usize(), 4);
        assert_eq!(layout.total_padding(), 2);
        assert_eq!(layout.padding(), &[PaddingRegion { offset: 26, len: 2 }]);

        let outcome = verifier.verify_entry(&CatalogEntry::of::<ViewWithCounters>());
        assert!(outcome.is_match(), "{}", outcome);
    }

    #[test]
    fn test_fixture_surface_matches_host() {
        let report = StructVerifier::new().run(&fixture_catalog());
        assert!(report.is_pass(), "{}", report.format_report());
        assert_eq!(report.summary().matched, 3);
    }

    #[test]
    fn test_parallel_sweep_agrees_with_sequential() {
        let catalog = fixture_catalog();
        let verifier = StructVerifier::new();

        let sequential = verifier.run(&catalog);
        let parallel = verifier.run_parallel(&catalog);
        assert_eq!(sequential.outcomes(), parallel.outcomes());
    }

    #[test]
    fn test_sweep_continues_past_malformed_declaration() {
        let mut catalog = fixture_catalog();
        catalog.register::<Poisoned>();

        let report = StructVerifier::new().run(&catalog);
        assert!(!report.is_pass());
        assert_eq!(report.summary().aborted, 1);
        assert_eq!(report.summary().matched, 3);

        let (type_name, reason) = report.aborted().next().unwrap();
        assert_eq!(type_name, "Poisoned");
        assert!(reason.contains("ManagedHandle"));
    }

    #[test]
    fn test_drift_is_reported_per_field() {
        // Same declaration as PackedCounters, but the host layout is taken
        // from an unpacked struct, so every offset after the first drifts.
        #[repr(C)]
        struct UnpackedCounters {
            tag: u8,
            count: i32,
            flag: u8,
            total: i32,
        }

        struct DriftingCounters;

        impl NativeStruct for DriftingCounters {
            fn type_name() -> &'static str {
                "DriftingCounters"
            }

            fn decl() -> StructDecl {
                StructDecl::sequential("DriftingCounters")
                    .with_pack(1)
                    .prim("tag", NativeType::U8)
                    .prim("count", NativeType::I32)
                    .prim("flag", NativeType::U8)
                    .prim("total", NativeType::I32)
            }

            fn actual() -> ActualLayout {
                ActualLayout::new("DriftingCounters", mem::size_of::<UnpackedCounters>())
                    .with_field("tag", mem::offset_of!(UnpackedCounters, tag))
                    .with_field("count", mem::offset_of!(UnpackedCounters, count))
                    .with_field("flag", mem::offset_of!(UnpackedCounters, flag))
                    .with_field("total", mem::offset_of!(UnpackedCounters, total))
            }
        }

        let outcome = StructVerifier::new().verify_entry(&CatalogEntry::of::<DriftingCounters>());
        assert!(outcome.is_mismatch());

        if let TypeOutcome::Verified { report } = outcome {
            assert_eq!(report.offset_mismatches().len(), 3);
            let size = report.size_mismatch().unwrap();
            assert_eq!(size.expected, 10);
            assert_eq!(size.actual, 16);
        } else {
            panic!("expected a verified outcome with findings");
        }
    }
}
