use crate::application::dto::{ComponentRequest, ResolutionOptions};
use crate::license_resolution::domain::{
    BatchResolution, ComponentLicenseResult, ComponentQuery, LicenseAssociation, LicenseEntry,
    ResolutionOutcome,
};
use crate::license_resolution::services::{ExpressionParser, SpdxRegistry};
use crate::ports::outbound::{ComponentResolver, LicenseRecordStore};
use crate::shared::{EngineError, Result};
use futures::stream::{self, StreamExt};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Separator used to build the conjunctive license statement
const STATEMENT_SEPARATOR: &str = " AND ";

/// Which association set produced the license ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssociationScope {
    Exact,
    Unversioned,
}

/// ResolveComponentLicensesUseCase - resolves PURLs to SPDX license ids
///
/// Every query yields exactly one result, in input order. Resolver misses,
/// store faults and unparseable records never fail the batch; they leave the
/// affected item without licenses and are recorded as a `ResolutionOutcome`.
///
/// # Type Parameters
/// * `CR` - ComponentResolver implementation
/// * `LS` - LicenseRecordStore implementation
pub struct ResolveComponentLicensesUseCase<CR, LS> {
    component_resolver: CR,
    record_store: LS,
    registry: Arc<SpdxRegistry>,
    options: ResolutionOptions,
}

impl<CR, LS> ResolveComponentLicensesUseCase<CR, LS>
where
    CR: ComponentResolver,
    LS: LicenseRecordStore,
{
    /// Creates a new ResolveComponentLicensesUseCase with injected dependencies
    pub fn new(
        component_resolver: CR,
        record_store: LS,
        registry: Arc<SpdxRegistry>,
        options: ResolutionOptions,
    ) -> Self {
        Self {
            component_resolver,
            record_store,
            registry,
            options,
        }
    }

    /// Resolves a batch of component requests
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` for an empty batch or an empty purl.
    /// Validation runs before any item is resolved.
    pub async fn execute(&self, requests: &[ComponentRequest]) -> Result<BatchResolution> {
        if requests.is_empty() {
            return Err(
                EngineError::invalid_input("components", "must contain at least one component")
                    .into(),
            );
        }

        let queries = requests
            .iter()
            .map(|r| ComponentQuery::new(r.purl.clone(), r.requirement.clone()))
            .collect::<Result<Vec<_>>>()?;

        let (results, outcomes): (Vec<_>, Vec<_>) = stream::iter(queries)
            .map(|query| async move { self.resolve_query(&query).await })
            .buffered(self.options.concurrency.max(1))
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .unzip();

        let batch = BatchResolution::new(results, &outcomes);
        info!(
            total = batch.summary.total,
            resolved = batch.summary.resolved(),
            status = %batch.status,
            "batch resolution finished"
        );
        Ok(batch)
    }

    /// Resolves a single component request
    pub async fn execute_one(&self, request: &ComponentRequest) -> Result<ComponentLicenseResult> {
        let query = ComponentQuery::new(request.purl.clone(), request.requirement.clone())?;
        let (result, _) = self.resolve_query(&query).await;
        Ok(result)
    }

    async fn resolve_query(
        &self,
        query: &ComponentQuery,
    ) -> (ComponentLicenseResult, ResolutionOutcome) {
        let mut result =
            ComponentLicenseResult::unresolved(query.echo_purl(), query.echo_requirement());

        let component = match self
            .component_resolver
            .resolve_version(query.purl(), query.requirement())
            .await
        {
            Ok(component) => component,
            Err(e) => {
                warn!(
                    purl = query.purl(),
                    requirement = query.requirement(),
                    error = %e,
                    "failed to resolve component version"
                );
                return (result, ResolutionOutcome::ComponentNotFound);
            }
        };
        result.version = component.version.clone();

        let (associations, scope) = match self
            .find_associations(&component.purl, &component.version)
            .await
        {
            Ok(Some(found)) => found,
            Ok(None) => return (result, ResolutionOutcome::NoLicenseData),
            Err(e) => {
                warn!(
                    purl = %component.purl,
                    version = %component.version,
                    error = %e,
                    "license association query failed"
                );
                return (result, ResolutionOutcome::StoreFault);
            }
        };

        let license_ids = self.options.merge_strategy.license_ids(&associations);
        if license_ids.is_empty() {
            warn!(
                purl = %component.purl,
                version = %component.version,
                "no license data available"
            );
            return (result, ResolutionOutcome::NoLicenseData);
        }
        debug!(
            purl = %component.purl,
            version = %component.version,
            count = license_ids.len(),
            "found unique license ids"
        );

        let licenses = self.collect_licenses(&license_ids).await;
        if licenses.is_empty() {
            warn!(
                purl = %component.purl,
                version = %component.version,
                processed = license_ids.len(),
                "no valid licenses found after processing license ids"
            );
            return (result, ResolutionOutcome::NoValidLicenses);
        }

        result.statement = licenses
            .iter()
            .map(|l| l.id.as_str())
            .collect::<Vec<_>>()
            .join(STATEMENT_SEPARATOR);
        result.licenses = licenses;

        let outcome = match scope {
            AssociationScope::Exact => ResolutionOutcome::ResolvedExact,
            AssociationScope::Unversioned => ResolutionOutcome::ResolvedFallback,
        };
        (result, outcome)
    }

    /// Exact-version associations, falling back to unversioned ones
    ///
    /// `Ok(None)` means neither lookup returned any association.
    async fn find_associations(
        &self,
        purl: &str,
        version: &str,
    ) -> Result<Option<(Vec<LicenseAssociation>, AssociationScope)>> {
        let sources = &self.options.sources;

        let exact = self
            .record_store
            .find_associations(purl, version, sources)
            .await?;
        if !exact.is_empty() {
            return Ok(Some((exact, AssociationScope::Exact)));
        }

        info!(purl, version, "no exact-version license data, trying unversioned purl");
        let unversioned = self
            .record_store
            .find_unversioned_associations(purl, sources)
            .await?;
        if unversioned.is_empty() {
            info!(purl, "no license data for unversioned purl");
            return Ok(None);
        }
        Ok(Some((unversioned, AssociationScope::Unversioned)))
    }

    /// Turns license ids into SPDX entries, deduplicated by SPDX id
    ///
    /// Records that are missing, fail to load, or fail to parse are skipped.
    async fn collect_licenses(&self, license_ids: &BTreeSet<i32>) -> Vec<LicenseEntry> {
        let mut collected: IndexMap<String, LicenseEntry> = IndexMap::new();

        for &license_id in license_ids {
            let record = match self.record_store.get_license_record(license_id).await {
                Ok(Some(record)) => record,
                Ok(None) => {
                    warn!(license_id, "license record not found");
                    continue;
                }
                Err(e) => {
                    warn!(license_id, error = %e, "failed to fetch license record");
                    continue;
                }
            };

            let spdx_ids = match ExpressionParser::parse(&record.spdx_expression) {
                Ok(ids) => ids,
                Err(e) => {
                    warn!(
                        license_id,
                        expression = %record.spdx_expression,
                        error = %e,
                        "failed to parse license expression"
                    );
                    continue;
                }
            };

            for spdx_id in spdx_ids {
                if collected.contains_key(&spdx_id) {
                    continue;
                }
                if !self.registry.is_valid_license_id(&spdx_id) {
                    debug!(license_id, spdx_id = %spdx_id, "identifier not in SPDX license list");
                }
                let full_name = self.registry.full_name(&spdx_id).to_string();
                collected.insert(spdx_id.clone(), LicenseEntry::new(spdx_id, full_name));
            }
        }

        collected.into_values().collect()
    }
}
