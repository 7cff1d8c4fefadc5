use std::path::{Path, PathBuf};
use std::sync::Arc;
use chrono::Utc;
use crate::config::constants::{COLLECTED_EXTENSIONS, ENV_FILE_PREFIX, PROJECT_DESCRIPTOR};
use crate::enums::descriptor_lookup::DescriptorLookup;
use crate::errors::{ReviewError, ReviewResult};
use crate::services::dependency_extractor::DependencyExtractor;
use crate::services::env_file_detector::EnvFileDetector;
use crate::services::exclusion_policy::ExclusionPolicy;
use crate::services::heuristic_scanner::HeuristicScanner;
use crate::services::project_locator::ProjectRootLocator;
use crate::services::report_generator::{ReportGenerator, ReportInputs};
use crate::services::tree_walker::{LeafFilter, TreeWalker};
use crate::services::zip_extractor::ZipExtractor;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::extracted_project::ExtractedProject;
use crate::structs::quality_report::QualityReport;
use crate::structs::source_file::SourceFile;
use crate::traits::archive_extractor::ArchiveExtractor;

/// The located project inside an extracted archive.
struct ProjectTree {
    root: PathBuf,
    descriptor: PathBuf,
    files: Vec<String>,
}

/// Report plus the sampled sources, for callers that send files to a model.
#[derive(Debug)]
pub struct ReviewMaterial {
    pub report: QualityReport,
    pub sources: Vec<SourceFile>,
}

/// extract → locate root → dependencies → walk → env files → scan → report.
/// Blocking; run it off the async executor.
#[derive(Clone)]
pub struct ArchivePipeline {
    extractor: Arc<dyn ArchiveExtractor>,
    exclusions: ExclusionPolicy,
    scanner: HeuristicScanner,
    generator: ReportGenerator,
}

impl ArchivePipeline {
    pub fn new(
        extractor: Arc<dyn ArchiveExtractor>,
        exclusions: ExclusionPolicy,
        scanner: HeuristicScanner,
        generator: ReportGenerator,
    ) -> Self {
        Self {
            extractor,
            exclusions,
            scanner,
            generator,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            Arc::new(ZipExtractor),
            ExclusionPolicy::default().with_extra(config.extra_excluded_dirs.iter().cloned()),
            HeuristicScanner::new(config.sample_limit, config.long_line_threshold),
            ReportGenerator::new(config.long_line_threshold),
        )
    }

    /// Consumes the workspace; it is removed before this returns, on every path.
    pub fn inspect(&self, project: ExtractedProject, description: Option<String>) -> ReviewResult<QualityReport> {
        let tree = self.open_project(&project)?;
        Ok(self.build_report(&tree, description))
    }

    pub fn review_material(&self, project: ExtractedProject, description: Option<String>) -> ReviewResult<ReviewMaterial> {
        let tree = self.open_project(&project)?;
        let sources = self.scanner.read_sample(&tree.root, &tree.files);
        let report = self.build_report(&tree, description);
        Ok(ReviewMaterial { report, sources })
    }

    fn open_project(&self, project: &ExtractedProject) -> ReviewResult<ProjectTree> {
        self.extractor.extract(project.archive(), project.root())?;

        let locator = ProjectRootLocator::new(&self.exclusions);
        let descriptor = match locator.locate(project.root())? {
            DescriptorLookup::Found(path) => path,
            DescriptorLookup::NotFound => {
                return Err(ReviewError::user_input(&format!("No {} found", PROJECT_DESCRIPTOR)));
            }
        };

        if log::log_enabled!(log::Level::Debug) {
            log_other_descriptors(&locator, project.root(), &descriptor);
        }

        let root = descriptor
            .parent()
            .map(PathBuf::from)
            .ok_or_else(|| ReviewError::pipeline_error("locate root", "descriptor has no parent directory"))?;

        let filter = LeafFilter {
            extensions: COLLECTED_EXTENSIONS,
            name_prefix: Some(ENV_FILE_PREFIX),
        };
        let files = TreeWalker::new(&self.exclusions).walk_filtered(&root, &root, filter)?;

        log::info!("📁 Project root {} with {} collected files", root.display(), files.len());

        Ok(ProjectTree { root, descriptor, files })
    }

    fn build_report(&self, tree: &ProjectTree, description: Option<String>) -> QualityReport {
        let manifest = DependencyExtractor::extract(&tree.descriptor);
        let env_files = EnvFileDetector::detect(&tree.files);
        let scan = self.scanner.scan(&tree.root, &tree.files);

        self.generator.generate(
            ReportInputs {
                manifest,
                identifiers: scan.identifiers,
                readability: scan.readability,
                env_files,
                analyzed_files: scan.analyzed_files,
                project_description: description.filter(|d| !d.trim().is_empty()),
            },
            Utc::now(),
        )
    }
}

/// Diagnostics only: a second full walk, so errors are logged and dropped.
fn log_other_descriptors(locator: &ProjectRootLocator<'_>, root: &Path, chosen: &Path) -> usize {
    match locator.candidates(root) {
        Ok(candidates) => {
            if candidates.len() > 1 {
                log::debug!(
                    "{} descriptors found, using the first in traversal order: {}",
                    candidates.len(),
                    chosen.display()
                );
            }
            candidates.len()
        }
        Err(e) => {
            log::debug!("Could not list descriptors under {}: {}", root.display(), e);
            0
        }
    }
}
