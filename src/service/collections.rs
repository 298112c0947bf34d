//! Collection aggregators: fetch an envelope of references, then aggregate
//! every member through [`PokedexService::fetch_entity`] in parallel.

use super::{normalize_query, PokedexService};
use crate::api::resource_id;
use crate::api::wire::{NamedResourceList, RawTypeMembers};
use crate::config::MemberFailurePolicy;
use crate::errors::{ClientError, ClientResult};
use futures::future::{join_all, try_join_all};
use schema::EntityRecord;
use tracing::{debug, warn};

impl PokedexService {
    /// One page of the catalog, in the API's listing order.
    pub async fn fetch_collection(&self, offset: u32, limit: u32) -> ClientResult<Vec<EntityRecord>> {
        let url = self.api.endpoints().pokemon_page(offset, limit);
        let page: NamedResourceList = self
            .api
            .get_json(&url)
            .await
            .map_err(|e| ClientError::collection("Pokémon list", e))?;

        let total = page.count;
        let names: Vec<String> = page.results.into_iter().map(|r| r.name).collect();
        debug!(offset, limit, ?total, members = names.len(), "fetched list page");
        self.fan_out("Pokémon list", names).await
    }

    /// The first members of a category tag, capped at the configured limit
    /// and kept in the membership list's order.
    pub async fn fetch_by_category(&self, tag: &str) -> ClientResult<Vec<EntityRecord>> {
        let tag = normalize_query(tag).ok_or(ClientError::EmptyQuery)?;
        let resource = format!("type '{}'", tag);
        let url = self.api.endpoints().type_members(&tag);
        let members: RawTypeMembers = self
            .api
            .get_json(&url)
            .await
            .map_err(|e| ClientError::collection(resource.clone(), e))?;

        let total = members.pokemon.len();
        let queries: Vec<String> = members
            .pokemon
            .into_iter()
            .take(self.config.category_member_cap)
            .map(|member| {
                resource_id(&member.pokemon.url)
                    .map(str::to_string)
                    .unwrap_or(member.pokemon.name)
            })
            .collect();
        debug!(%tag, total, fetching = queries.len(), "fetched type membership");
        self.fan_out(&resource, queries).await
    }

    /// All category tags meant for display, in the API's order.
    pub async fn fetch_tag_list(&self) -> ClientResult<Vec<String>> {
        let url = self.api.endpoints().types();
        let list: NamedResourceList = self
            .api
            .get_json(&url)
            .await
            .map_err(|e| ClientError::collection("type list", e))?;

        Ok(list
            .results
            .into_iter()
            .map(|r| r.name)
            .filter(|name| !self.config.is_excluded_tag(name))
            .collect())
    }

    /// Aggregates every query concurrently, preserving input order. What a
    /// member failure does depends on [`MemberFailurePolicy`].
    async fn fan_out(&self, resource: &str, queries: Vec<String>) -> ClientResult<Vec<EntityRecord>> {
        match self.config.member_failure {
            MemberFailurePolicy::Abort => {
                try_join_all(queries.iter().map(|query| self.fetch_entity(query)))
                    .await
                    .map_err(|e| ClientError::collection(resource, e))
            }
            MemberFailurePolicy::Skip => {
                let results = join_all(queries.iter().map(|query| self.fetch_entity(query))).await;
                Ok(results
                    .into_iter()
                    .filter_map(|result| match result {
                        Ok(record) => Some(record),
                        Err(e) => {
                            warn!(%resource, error = %e, "skipping collection member");
                            None
                        }
                    })
                    .collect())
            }
        }
    }
}
