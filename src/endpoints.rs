//! Descriptors of the Ensembl REST API endpoints.
//!
//! Every operation of the API is one [Endpoint] constant. Paths are relative
//! to the server URL and contain `{placeholder}` segments which are filled
//! from path arguments when a call is made, see [crate::CallBuilder].
//!
//! <https://rest.ensembl.org/documentation>

use crate::errors::ConfigError;
use crate::types::{Identifier, RestMethod};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when a value is put into a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// The batched variant of an endpoint: identifiers go into a JSON body
/// under `key` instead of into the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchForm {
    pub method: RestMethod,
    pub path: &'static str,
    pub key: &'static str,
}

/// Static description of one Ensembl REST operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: RestMethod,
    pub path: &'static str,
    /// Placeholder of `path` which receives the identifier of a dispatched call.
    pub ident: Option<&'static str>,
    pub batch: Option<BatchForm>,
}

impl Endpoint {
    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: RestMethod::Get,
            path,
            ident: None,
            batch: None,
        }
    }

    pub const fn post(name: &'static str, path: &'static str) -> Self {
        Self {
            method: RestMethod::Post,
            ..Self::get(name, path)
        }
    }

    pub const fn with_ident(self, placeholder: &'static str) -> Self {
        Self {
            ident: Some(placeholder),
            ..self
        }
    }

    pub const fn with_batch(self, path: &'static str, key: &'static str) -> Self {
        Self {
            batch: Some(BatchForm {
                method: RestMethod::Post,
                path,
                key,
            }),
            ..self
        }
    }

    pub fn supports_batch(&self) -> bool {
        self.batch.is_some()
    }

    /// Names of the placeholders in the scalar path, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        placeholders(self.path)
    }

    /// Method of the request for `ident`, or `None` if this endpoint cannot
    /// be called with it.
    pub fn method_for(&self, ident: &Identifier) -> Option<RestMethod> {
        match ident {
            Identifier::Single(_) => self.ident.map(|_| self.method),
            Identifier::Many(_) => self.batch.map(|b| b.method),
        }
    }

    /// Fill in the scalar path.
    pub fn render_path<K: AsRef<str>, V: AsRef<str>>(
        &self,
        args: &[(K, V)],
    ) -> Result<String, ConfigError> {
        render(self.name, self.path, args)
    }

    /// Fill in the batch path.
    pub fn render_batch_path<K: AsRef<str>, V: AsRef<str>>(
        &self,
        args: &[(K, V)],
    ) -> Result<String, ConfigError> {
        let batch = self.batch.ok_or(ConfigError::NoBatchForm(self.name))?;
        render(self.name, batch.path, args)
    }
}

fn placeholders(template: &'static str) -> Vec<&'static str> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                found.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    found
}

fn render<K: AsRef<str>, V: AsRef<str>>(
    endpoint: &'static str,
    template: &str,
    args: &[(K, V)],
) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            rest = &rest[start..];
            break;
        };
        let name = &after[..end];
        let value = args
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_ref())
            .ok_or_else(|| ConfigError::MissingPathArgument {
                endpoint,
                name: name.to_string(),
            })?;
        out.extend(utf8_percent_encode(value, PATH_SEGMENT));
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Find an endpoint by its name, e.g. `"lookup_id"`.
pub fn by_name(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().copied().find(|e| e.name == name)
}

// ========================================
//                 ARCHIVE
// ========================================

pub const ARCHIVE_ID: Endpoint = Endpoint::get("archive_id", "archive/id/{id}")
    .with_ident("id")
    .with_batch("archive/id", "id");

// ========================================
//           COMPARATIVE GENOMICS
// ========================================

pub const CAFE_TREE: Endpoint = Endpoint::get("cafe_tree", "cafe/genetree/id/{id}");
pub const CAFE_TREE_MEMBER_ID: Endpoint =
    Endpoint::get("cafe_tree_member_id", "cafe/genetree/member/id/{id}");
pub const CAFE_TREE_MEMBER_SYMBOL: Endpoint = Endpoint::get(
    "cafe_tree_member_symbol",
    "cafe/genetree/member/symbol/{species}/{symbol}",
);
pub const CAFE_TREE_SPECIES_MEMBER_ID: Endpoint = Endpoint::get(
    "cafe_tree_species_member_id",
    "cafe/genetree/member/id/{species}/{id}",
);
pub const GENETREE: Endpoint = Endpoint::get("genetree", "genetree/id/{id}");
pub const GENETREE_MEMBER_ID: Endpoint =
    Endpoint::get("genetree_member_id", "genetree/member/id/{id}");
pub const GENETREE_MEMBER_SYMBOL: Endpoint = Endpoint::get(
    "genetree_member_symbol",
    "genetree/member/symbol/{species}/{symbol}",
);
pub const GENETREE_SPECIES_MEMBER_ID: Endpoint = Endpoint::get(
    "genetree_species_member_id",
    "genetree/member/id/{species}/{id}",
);
pub const GENOMIC_ALIGNMENT_REGION: Endpoint = Endpoint::get(
    "genomic_alignment_region",
    "alignment/region/{species}/{region}",
);
pub const HOMOLOGY_ENSEMBLGENE: Endpoint = Endpoint::get("homology_ensemblgene", "homology/id/{id}");
pub const HOMOLOGY_SPECIES_GENE_ID: Endpoint =
    Endpoint::get("homology_species_gene_id", "homology/id/{species}/{id}");
pub const HOMOLOGY_SYMBOL: Endpoint =
    Endpoint::get("homology_symbol", "homology/symbol/{species}/{symbol}");

// ========================================
//             CROSS REFERENCES
// ========================================

pub const XREF_EXTERNAL: Endpoint = Endpoint::get("xref_external", "xrefs/symbol/{species}/{symbol}");
pub const XREF_ID: Endpoint = Endpoint::get("xref_id", "xrefs/id/{id}");
pub const XREF_NAME: Endpoint = Endpoint::get("xref_name", "xrefs/name/{species}/{name}");

// ========================================
//               INFORMATION
// ========================================

pub const INFO_ANALYSIS: Endpoint = Endpoint::get("info_analysis", "info/analysis/{species}");
pub const INFO_ASSEMBLY: Endpoint = Endpoint::get("info_assembly", "info/assembly/{species}");
pub const INFO_ASSEMBLY_REGION: Endpoint = Endpoint::get(
    "info_assembly_region",
    "info/assembly/{species}/{region_name}",
);
pub const INFO_BIOTYPES: Endpoint = Endpoint::get("info_biotypes", "info/biotypes/{species}");
pub const INFO_BIOTYPES_GROUPS: Endpoint =
    Endpoint::get("info_biotypes_groups", "info/biotypes/groups");
pub const INFO_BIOTYPES_GROUP: Endpoint =
    Endpoint::get("info_biotypes_group", "info/biotypes/groups/{group}");
pub const INFO_BIOTYPES_GROUP_OBJECT_TYPE: Endpoint = Endpoint::get(
    "info_biotypes_group_object_type",
    "info/biotypes/groups/{group}/{object_type}",
);
pub const INFO_BIOTYPES_NAME: Endpoint =
    Endpoint::get("info_biotypes_name", "info/biotypes/name/{name}");
pub const INFO_BIOTYPES_NAME_OBJECT_TYPE: Endpoint = Endpoint::get(
    "info_biotypes_name_object_type",
    "info/biotypes/name/{name}/{object_type}",
);
pub const INFO_COMPARA_METHODS: Endpoint =
    Endpoint::get("info_compara_methods", "info/compara/methods");
pub const INFO_COMPARA_SPECIES_SETS: Endpoint = Endpoint::get(
    "info_compara_species_sets",
    "info/compara/species_sets/{method}",
);
pub const INFO_COMPARAS: Endpoint = Endpoint::get("info_comparas", "info/comparas");
pub const INFO_DATA: Endpoint = Endpoint::get("info_data", "info/data");
pub const INFO_EG_VERSION: Endpoint = Endpoint::get("info_eg_version", "info/eg_version");
pub const INFO_EXTERNAL_DBS: Endpoint =
    Endpoint::get("info_external_dbs", "info/external_dbs/{species}");
pub const INFO_DIVISIONS: Endpoint = Endpoint::get("info_divisions", "info/divisions");
pub const INFO_GENOMES: Endpoint = Endpoint::get("info_genomes", "info/genomes/{name}");
pub const INFO_GENOMES_ACCESSION: Endpoint = Endpoint::get(
    "info_genomes_accession",
    "info/genomes/accession/{accession}",
);
pub const INFO_GENOMES_ASSEMBLY: Endpoint = Endpoint::get(
    "info_genomes_assembly",
    "info/genomes/assembly/{assembly_id}",
);
pub const INFO_GENOMES_DIVISION: Endpoint =
    Endpoint::get("info_genomes_division", "info/genomes/division/{division}");
pub const INFO_GENOMES_TAXONOMY: Endpoint = Endpoint::get(
    "info_genomes_taxonomy",
    "info/genomes/taxonomy/{taxon_name}",
);
pub const INFO_PING: Endpoint = Endpoint::get("info_ping", "info/ping");
pub const INFO_REST: Endpoint = Endpoint::get("info_rest", "info/rest");
pub const INFO_SOFTWARE: Endpoint = Endpoint::get("info_software", "info/software");
pub const INFO_SPECIES: Endpoint = Endpoint::get("info_species", "info/species");
pub const INFO_VARIATION: Endpoint = Endpoint::get("info_variation", "info/variation/{species}");
pub const INFO_VARIATION_CONSEQUENCE_TYPES: Endpoint = Endpoint::get(
    "info_variation_consequence_types",
    "info/variation/consequence_types",
);
pub const INFO_VARIATION_POPULATION_NAME: Endpoint = Endpoint::get(
    "info_variation_population_name",
    "info/variation/populations/{species}/{population_name}",
);
pub const INFO_VARIATION_POPULATIONS: Endpoint = Endpoint::get(
    "info_variation_populations",
    "info/variation/populations/{species}",
);

// ========================================
//          LINKAGE DISEQUILIBRIUM
// ========================================

pub const LD_ID: Endpoint = Endpoint::get("ld_id", "ld/{species}/{id}/{population_name}");
pub const LD_PAIRWISE: Endpoint =
    Endpoint::get("ld_pairwise", "ld/{species}/pairwise/{id1}/{id2}");
pub const LD_REGION: Endpoint = Endpoint::get(
    "ld_region",
    "ld/{species}/region/{region}/{population_name}",
);

// ========================================
//                  LOOKUP
// ========================================

pub const LOOKUP_ID: Endpoint = Endpoint::get("lookup_id", "lookup/id/{id}")
    .with_ident("id")
    .with_batch("lookup/id", "ids");
pub const LOOKUP_SYMBOL: Endpoint =
    Endpoint::get("lookup_symbol", "lookup/symbol/{species}/{symbol}")
        .with_ident("symbol")
        .with_batch("lookup/symbol/{species}", "symbols");

// ========================================
//                 MAPPING
// ========================================

pub const MAP_CDNA: Endpoint = Endpoint::get("map_cdna", "map/cdna/{id}/{region}");
pub const MAP_CDS: Endpoint = Endpoint::get("map_cds", "map/cds/{id}/{region}");
pub const MAP_ASSEMBLY: Endpoint = Endpoint::get(
    "map_assembly",
    "map/{species}/{asm_one}/{region}/{asm_two}",
);
pub const MAP_TRANSLATION: Endpoint =
    Endpoint::get("map_translation", "map/translation/{id}/{region}");

// ========================================
//          ONTOLOGIES AND TAXONOMY
// ========================================

pub const ONTOLOGY_ANCESTORS: Endpoint =
    Endpoint::get("ontology_ancestors", "ontology/ancestors/{id}");
pub const ONTOLOGY_ANCESTORS_CHART: Endpoint =
    Endpoint::get("ontology_ancestors_chart", "ontology/ancestors/chart/{id}");
pub const ONTOLOGY_DESCENDANTS: Endpoint =
    Endpoint::get("ontology_descendants", "ontology/descendants/{id}");
pub const ONTOLOGY_ID: Endpoint = Endpoint::get("ontology_id", "ontology/id/{id}");
pub const ONTOLOGY_NAME: Endpoint = Endpoint::get("ontology_name", "ontology/name/{name}");
pub const TAXONOMY_CLASSIFICATION: Endpoint =
    Endpoint::get("taxonomy_classification", "taxonomy/classification/{id}");
pub const TAXONOMY_ID: Endpoint = Endpoint::get("taxonomy_id", "taxonomy/id/{id}");
pub const TAXONOMY_NAME: Endpoint = Endpoint::get("taxonomy_name", "taxonomy/name/{name}");

// ========================================
//                 OVERLAP
// ========================================

pub const OVERLAP_ID: Endpoint = Endpoint::get("overlap_id", "overlap/id/{id}");
pub const OVERLAP_REGION: Endpoint =
    Endpoint::get("overlap_region", "overlap/region/{species}/{region}");
pub const OVERLAP_TRANSLATION: Endpoint =
    Endpoint::get("overlap_translation", "overlap/translation/{id}");

// ========================================
//          PHENOTYPE ANNOTATIONS
// ========================================

pub const PHENOTYPE_ACCESSION: Endpoint = Endpoint::get(
    "phenotype_accession",
    "phenotype/accession/{species}/{accession}",
);
pub const PHENOTYPE_GENE: Endpoint =
    Endpoint::get("phenotype_gene", "phenotype/gene/{species}/{gene}");
pub const PHENOTYPE_REGION: Endpoint =
    Endpoint::get("phenotype_region", "phenotype/region/{species}/{region}");
pub const PHENOTYPE_TERM: Endpoint =
    Endpoint::get("phenotype_term", "phenotype/term/{species}/{term}");

// ========================================
//                REGULATION
// ========================================

pub const REGULATORY_MICROARRAY_VENDOR: Endpoint = Endpoint::get(
    "regulatory_microarray_vendor",
    "regulatory/species/{species}/microarray/{microarray}/vendor/{vendor}",
);
pub const REGULATORY_EPIGENOMES: Endpoint = Endpoint::get(
    "regulatory_epigenomes",
    "regulatory/species/{species}/epigenome",
);
pub const SPECIES_BINDING_MATRIX: Endpoint = Endpoint::get(
    "species_binding_matrix",
    "species/{species}/binding_matrix/{binding_matrix}",
);
pub const REGULATORY_MICROARRAYS: Endpoint = Endpoint::get(
    "regulatory_microarrays",
    "regulatory/species/{species}/microarray",
);
pub const REGULATORY_PROBE: Endpoint = Endpoint::get(
    "regulatory_probe",
    "regulatory/species/{species}/microarray/{microarray}/probe/{probe}",
);
pub const REGULATORY_PROBE_SET: Endpoint = Endpoint::get(
    "regulatory_probe_set",
    "regulatory/species/{species}/microarray/{microarray}/probe_set/{probe_set}",
);
pub const REGULATORY_ID: Endpoint =
    Endpoint::get("regulatory_id", "regulatory/species/{species}/id/{id}");

// ========================================
//                 SEQUENCE
// ========================================

pub const SEQUENCE_ID: Endpoint = Endpoint::get("sequence_id", "sequence/id/{id}")
    .with_ident("id")
    .with_batch("sequence/id", "ids");
pub const SEQUENCE_REGION: Endpoint =
    Endpoint::get("sequence_region", "sequence/region/{species}/{region}")
        .with_ident("region")
        .with_batch("sequence/region/{species}", "regions");

// ========================================
//           TRANSCRIPT HAPLOTYPES
// ========================================

pub const TRANSCRIPT_HAPLOTYPES: Endpoint =
    Endpoint::get("transcript_haplotypes", "transcript_haplotypes/{species}/{id}");

// ========================================
//                   VEP
// ========================================

pub const VEP_HGVS: Endpoint = Endpoint::get("vep_hgvs", "vep/{species}/hgvs/{hgvs_notation}")
    .with_ident("hgvs_notation")
    .with_batch("vep/{species}/hgvs", "hgvs_notations");
pub const VEP_ID: Endpoint = Endpoint::get("vep_id", "vep/{species}/id/{id}")
    .with_ident("id")
    .with_batch("vep/{species}/id", "ids");
pub const VEP_REGION: Endpoint =
    Endpoint::get("vep_region", "vep/{species}/region/{region}/{allele}")
        .with_ident("region")
        .with_batch("vep/{species}/region", "variants");

// ========================================
//                VARIATION
// ========================================

pub const VARIANT_RECODER: Endpoint =
    Endpoint::get("variant_recoder", "variant_recoder/{species}/{id}")
        .with_ident("id")
        .with_batch("variant_recoder/{species}", "ids");
pub const VARIATION_ID: Endpoint = Endpoint::get("variation_id", "variation/{species}/{id}")
    .with_ident("id")
    .with_batch("variation/{species}", "ids");
pub const VARIATION_PMCID: Endpoint =
    Endpoint::get("variation_pmcid", "variation/{species}/pmcid/{pmcid}");
pub const VARIATION_PMID: Endpoint =
    Endpoint::get("variation_pmid", "variation/{species}/pmid/{pmid}");

// ========================================
//             VARIATION GA4GH
// ========================================

pub const BEACON: Endpoint = Endpoint::get("beacon", "ga4gh/beacon");
pub const BEACON_QUERY: Endpoint = Endpoint::get("beacon_query", "ga4gh/beacon/query");
pub const BEACON_QUERY_SEARCH: Endpoint =
    Endpoint::post("beacon_query_search", "ga4gh/beacon/query");
pub const GA4GH_FEATURES_ID: Endpoint = Endpoint::get("ga4gh_features_id", "ga4gh/features/{id}");
pub const GA4GH_FEATURES_SEARCH: Endpoint =
    Endpoint::post("ga4gh_features_search", "ga4gh/features/search");
pub const GA4GH_CALLSETS_SEARCH: Endpoint =
    Endpoint::post("ga4gh_callsets_search", "ga4gh/callsets/search");
pub const GA4GH_CALLSETS_ID: Endpoint = Endpoint::get("ga4gh_callsets_id", "ga4gh/callsets/{id}");
pub const GA4GH_DATASETS_SEARCH: Endpoint =
    Endpoint::post("ga4gh_datasets_search", "ga4gh/datasets/search");
pub const GA4GH_DATASETS_ID: Endpoint = Endpoint::get("ga4gh_datasets_id", "ga4gh/datasets/{id}");
pub const GA4GH_FEATURESETS_SEARCH: Endpoint =
    Endpoint::post("ga4gh_featuresets_search", "ga4gh/featuresets/search");
pub const GA4GH_FEATURESETS_ID: Endpoint =
    Endpoint::get("ga4gh_featuresets_id", "ga4gh/featuresets/{id}");
pub const GA4GH_VARIANTS_ID: Endpoint = Endpoint::get("ga4gh_variants_id", "ga4gh/variants/{id}");
pub const GA4GH_VARIANTANNOTATIONS_SEARCH: Endpoint = Endpoint::post(
    "ga4gh_variantannotations_search",
    "ga4gh/variantannotations/search",
);
pub const GA4GH_VARIANTS_SEARCH: Endpoint =
    Endpoint::post("ga4gh_variants_search", "ga4gh/variants/search");
pub const GA4GH_VARIANTSETS_SEARCH: Endpoint =
    Endpoint::post("ga4gh_variantsets_search", "ga4gh/variantsets/search");
pub const GA4GH_VARIANTSETS_ID: Endpoint =
    Endpoint::get("ga4gh_variantsets_id", "ga4gh/variantsets/{id}");
pub const GA4GH_REFERENCES_SEARCH: Endpoint =
    Endpoint::post("ga4gh_references_search", "ga4gh/references/search");
pub const GA4GH_REFERENCES_ID: Endpoint =
    Endpoint::get("ga4gh_references_id", "ga4gh/references/{id}");
pub const GA4GH_REFERENCESETS_SEARCH: Endpoint =
    Endpoint::post("ga4gh_referencesets_search", "ga4gh/referencesets/search");
pub const GA4GH_REFERENCESETS_ID: Endpoint =
    Endpoint::get("ga4gh_referencesets_id", "ga4gh/referencesets/{id}");
pub const GA4GH_VARIANTANNOTATIONSETS_SEARCH: Endpoint = Endpoint::post(
    "ga4gh_variantannotationsets_search",
    "ga4gh/variantannotationsets/search",
);
pub const GA4GH_VARIANTANNOTATIONSETS_ID: Endpoint = Endpoint::get(
    "ga4gh_variantannotationsets_id",
    "ga4gh/variantannotationsets/{id}",
);

/// Every endpoint of this module.
pub const ALL: &[&Endpoint] = &[
    &ARCHIVE_ID,
    &CAFE_TREE,
    &CAFE_TREE_MEMBER_ID,
    &CAFE_TREE_MEMBER_SYMBOL,
    &CAFE_TREE_SPECIES_MEMBER_ID,
    &GENETREE,
    &GENETREE_MEMBER_ID,
    &GENETREE_MEMBER_SYMBOL,
    &GENETREE_SPECIES_MEMBER_ID,
    &GENOMIC_ALIGNMENT_REGION,
    &HOMOLOGY_ENSEMBLGENE,
    &HOMOLOGY_SPECIES_GENE_ID,
    &HOMOLOGY_SYMBOL,
    &XREF_EXTERNAL,
    &XREF_ID,
    &XREF_NAME,
    &INFO_ANALYSIS,
    &INFO_ASSEMBLY,
    &INFO_ASSEMBLY_REGION,
    &INFO_BIOTYPES,
    &INFO_BIOTYPES_GROUPS,
    &INFO_BIOTYPES_GROUP,
    &INFO_BIOTYPES_GROUP_OBJECT_TYPE,
    &INFO_BIOTYPES_NAME,
    &INFO_BIOTYPES_NAME_OBJECT_TYPE,
    &INFO_COMPARA_METHODS,
    &INFO_COMPARA_SPECIES_SETS,
    &INFO_COMPARAS,
    &INFO_DATA,
    &INFO_EG_VERSION,
    &INFO_EXTERNAL_DBS,
    &INFO_DIVISIONS,
    &INFO_GENOMES,
    &INFO_GENOMES_ACCESSION,
    &INFO_GENOMES_ASSEMBLY,
    &INFO_GENOMES_DIVISION,
    &INFO_GENOMES_TAXONOMY,
    &INFO_PING,
    &INFO_REST,
    &INFO_SOFTWARE,
    &INFO_SPECIES,
    &INFO_VARIATION,
    &INFO_VARIATION_CONSEQUENCE_TYPES,
    &INFO_VARIATION_POPULATION_NAME,
    &INFO_VARIATION_POPULATIONS,
    &LD_ID,
    &LD_PAIRWISE,
    &LD_REGION,
    &LOOKUP_ID,
    &LOOKUP_SYMBOL,
    &MAP_CDNA,
    &MAP_CDS,
    &MAP_ASSEMBLY,
    &MAP_TRANSLATION,
    &ONTOLOGY_ANCESTORS,
    &ONTOLOGY_ANCESTORS_CHART,
    &ONTOLOGY_DESCENDANTS,
    &ONTOLOGY_ID,
    &ONTOLOGY_NAME,
    &TAXONOMY_CLASSIFICATION,
    &TAXONOMY_ID,
    &TAXONOMY_NAME,
    &OVERLAP_ID,
    &OVERLAP_REGION,
    &OVERLAP_TRANSLATION,
    &PHENOTYPE_ACCESSION,
    &PHENOTYPE_GENE,
    &PHENOTYPE_REGION,
    &PHENOTYPE_TERM,
    &REGULATORY_MICROARRAY_VENDOR,
    &REGULATORY_EPIGENOMES,
    &SPECIES_BINDING_MATRIX,
    &REGULATORY_MICROARRAYS,
    &REGULATORY_PROBE,
    &REGULATORY_PROBE_SET,
    &REGULATORY_ID,
    &SEQUENCE_ID,
    &SEQUENCE_REGION,
    &TRANSCRIPT_HAPLOTYPES,
    &VEP_HGVS,
    &VEP_ID,
    &VEP_REGION,
    &VARIANT_RECODER,
    &VARIATION_ID,
    &VARIATION_PMCID,
    &VARIATION_PMID,
    &BEACON,
    &BEACON_QUERY,
    &BEACON_QUERY_SEARCH,
    &GA4GH_FEATURES_ID,
    &GA4GH_FEATURES_SEARCH,
    &GA4GH_CALLSETS_SEARCH,
    &GA4GH_CALLSETS_ID,
    &GA4GH_DATASETS_SEARCH,
    &GA4GH_DATASETS_ID,
    &GA4GH_FEATURESETS_SEARCH,
    &GA4GH_FEATURESETS_ID,
    &GA4GH_VARIANTS_ID,
    &GA4GH_VARIANTANNOTATIONS_SEARCH,
    &GA4GH_VARIANTS_SEARCH,
    &GA4GH_VARIANTSETS_SEARCH,
    &GA4GH_VARIANTSETS_ID,
    &GA4GH_REFERENCES_SEARCH,
    &GA4GH_REFERENCES_ID,
    &GA4GH_REFERENCESETS_SEARCH,
    &GA4GH_REFERENCESETS_ID,
    &GA4GH_VARIANTANNOTATIONSETS_SEARCH,
    &GA4GH_VARIANTANNOTATIONSETS_ID,
];
