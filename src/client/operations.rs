//! Shortcuts for the endpoints which accept one identifier or a list of
//! identifiers. Each returns a [CallBuilder] with the path arguments filled
//! in, ready for [CallBuilder::dispatch].

use super::call::CallBuilder;
use super::ensembl::EnsemblClient;
use crate::endpoints;

impl EnsemblClient {
    /// Latest version of stable identifiers.
    pub fn archive_id(&self) -> CallBuilder<'_> {
        self.endpoint(&endpoints::ARCHIVE_ID)
    }

    /// Find genes, transcripts, proteins and exons by stable identifier.
    pub fn lookup_id(&self) -> CallBuilder<'_> {
        self.endpoint(&endpoints::LOOKUP_ID)
    }

    /// Find genes by symbol, e.g. `BRCA2`.
    pub fn lookup_symbol(&self, species: &str) -> CallBuilder<'_> {
        self.endpoint(&endpoints::LOOKUP_SYMBOL)
            .arg("species", species)
    }

    pub fn sequence_id(&self) -> CallBuilder<'_> {
        self.endpoint(&endpoints::SEQUENCE_ID)
    }

    /// Genomic sequence of regions, e.g. `X:1000000..1000100:1`.
    pub fn sequence_region(&self, species: &str) -> CallBuilder<'_> {
        self.endpoint(&endpoints::SEQUENCE_REGION)
            .arg("species", species)
    }

    /// Translate variant identifiers, HGVS notations or genomic SPDI
    /// notations into each other.
    pub fn variant_recoder(&self, species: &str) -> CallBuilder<'_> {
        self.endpoint(&endpoints::VARIANT_RECODER)
            .arg("species", species)
    }

    pub fn variation_id(&self, species: &str) -> CallBuilder<'_> {
        self.endpoint(&endpoints::VARIATION_ID)
            .arg("species", species)
    }

    /// Variant consequences of HGVS notations.
    pub fn vep_hgvs(&self, species: &str) -> CallBuilder<'_> {
        self.endpoint(&endpoints::VEP_HGVS).arg("species", species)
    }

    /// Variant consequences of variant identifiers, e.g. `rs56116432`.
    pub fn vep_id(&self, species: &str) -> CallBuilder<'_> {
        self.endpoint(&endpoints::VEP_ID).arg("species", species)
    }

    /// Variant consequences of regions.
    ///
    /// A single region also needs the allele, set with
    /// `.arg("allele", "C")`. A batch takes VCF-like strings such as
    /// `"21 26960070 rs116645811 G A . . ."` instead.
    pub fn vep_region(&self, species: &str) -> CallBuilder<'_> {
        self.endpoint(&endpoints::VEP_REGION)
            .arg("species", species)
    }
}
