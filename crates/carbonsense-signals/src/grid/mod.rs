//! Grid Intensity Resolver.
//!
//! Priority chain per region, first success wins:
//! UK live API; California WattTime then ElectricityMaps; India temporal
//! model; static regional average for everything else and as the final
//! fallback. Never fails.

pub mod california;
pub mod comparison;
pub mod static_table;
pub mod temporal;
pub mod uk;

pub use comparison::compare_live_vs_static;

use std::sync::Arc;

use chrono::Timelike;

use carbonsense_core::config::{ProviderConfig, ProviderCredentials};
use carbonsense_core::models::{GridReading, SignalResult};
use carbonsense_core::region::Region;
use carbonsense_core::traits::{GridQuery, IClock, IGridIntensitySource, IJsonTransport};

use crate::auth::WattTimeSession;
use crate::{events, iso_timestamp};

const COMPONENT: &str = "grid";

/// Multi-strategy grid intensity resolver. Construct once per process.
pub struct GridIntensityResolver {
    transport: Arc<dyn IJsonTransport>,
    clock: Arc<dyn IClock>,
    config: ProviderConfig,
    watttime: WattTimeSession,
    electricitymaps_key: Option<String>,
}

impl GridIntensityResolver {
    /// Build the resolver. When WattTime credentials are present the login
    /// happens here, once.
    pub fn new(
        transport: Arc<dyn IJsonTransport>,
        clock: Arc<dyn IClock>,
        config: &ProviderConfig,
        credentials: &ProviderCredentials,
    ) -> Self {
        let resolver = Self {
            transport,
            clock,
            config: config.clone(),
            watttime: WattTimeSession::new(
                &config.watttime_url,
                config.grid_timeout(),
                credentials.watttime.clone(),
            ),
            electricitymaps_key: credentials.electricitymaps_key.clone(),
        };
        if resolver.watttime.has_credentials() {
            let _ = resolver.watttime.token(resolver.transport.as_ref());
        }
        resolver
    }

    /// Resolve the current intensity for `query`.
    pub fn resolve(&self, query: &GridQuery) -> GridReading {
        let reading = match query.region {
            Region::UnitedKingdom => match uk::fetch(self.transport.as_ref(), &self.config) {
                Ok(reading) => reading,
                Err(e) => {
                    events::fallback_taken(COMPONENT, &e, "static");
                    self.static_fallback(query)
                }
            },
            Region::California => self.resolve_california(query),
            Region::India => {
                let now = self.clock.now();
                let hour = query.hour.unwrap_or_else(|| now.hour());
                temporal::estimate(hour, query.is_weekend, iso_timestamp(now))
            }
            Region::UnitedStates | Region::Global => self.static_fallback(query),
        };

        events::signal_resolved(COMPONENT, &reading.meta.source, reading.meta.method);
        reading
    }

    fn resolve_california(&self, query: &GridQuery) -> GridReading {
        let transport = self.transport.as_ref();

        match california::fetch_watttime(transport, &self.config, &self.watttime) {
            Ok(reading) => return reading,
            Err(e) => events::fallback_taken(COMPONENT, &e, california::ELECTRICITYMAPS),
        }

        match california::fetch_electricitymaps(
            transport,
            &self.config,
            self.electricitymaps_key.as_deref(),
        ) {
            Ok(reading) => reading,
            Err(e) => {
                events::fallback_taken(COMPONENT, &e, "static");
                self.static_fallback(query)
            }
        }
    }

    fn static_fallback(&self, query: &GridQuery) -> GridReading {
        static_table::lookup(query.region, &query.location, iso_timestamp(self.clock.now()))
    }
}

impl IGridIntensitySource for GridIntensityResolver {
    fn grid_intensity(&self, query: &GridQuery) -> SignalResult<GridReading> {
        Ok(self.resolve(query))
    }
}
