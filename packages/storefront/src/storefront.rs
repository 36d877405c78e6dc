use std::fmt;

use chrono::{DateTime, Utc};
use cosmwasm_std::{Addr, Api, Binary, CosmosMsg, CustomQuery, QuerierWrapper, StdResult};
use cw2::ContractVersion;
use sale_minter::SaleMinterContract;

use crate::api::{CollectionMetadata, Endpoint, SaleInfo, Transport, UserWithAssets};
use crate::config::StorefrontConfig;
use crate::eligibility::{Eligibility, EligibilityInputs};
use crate::error::{FetchError, StorefrontError, TransportError};
use crate::fetch::{Loader, Ticket};
use crate::quantity::Quantity;
use crate::view::{ButtonLabel, Header, Notification, SaleSummary, Stage, StorefrontView};

/// The four independent backend reads of the storefront
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Collection,
    Sales,
    ActiveSale,
    ActiveUser,
}

impl Slot {
    pub const ALL: [Slot; 4] = [
        Slot::Collection,
        Slot::Sales,
        Slot::ActiveSale,
        Slot::ActiveUser,
    ];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::Collection => write!(f, "collection metadata"),
            Slot::Sales => write!(f, "sales"),
            Slot::ActiveSale => write!(f, "active sale"),
            Slot::ActiveUser => write!(f, "active user"),
        }
    }
}

/// A request the host has to perform and hand back through `Storefront::complete`
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRequest {
    pub slot: Slot,
    pub ticket: Ticket,
}

impl PendingRequest {
    pub fn url(&self) -> &str {
        &self.ticket.url
    }
}

/// Storefront state for one page lifetime: configuration, connected wallet and
/// contract, the selected quantity and the latest backend snapshots.
pub struct Storefront<A: Api> {
    api: A,
    config: StorefrontConfig,
    wallet: Option<Addr>,
    contract: Option<ContractVersion>,
    quantity: Quantity,
    collection: Loader<CollectionMetadata>,
    sales: Loader<Vec<SaleInfo>>,
    active_sale: Loader<SaleInfo>,
    active_user: Loader<UserWithAssets>,
    /// issued on wallet changes, handed out by the next `poll`
    queued: Vec<PendingRequest>,
}

impl<A: Api> Storefront<A> {
    pub fn new(api: A, config: StorefrontConfig) -> Self {
        Storefront {
            api,
            config,
            wallet: None,
            contract: None,
            quantity: Quantity::new(),
            collection: Loader::new(),
            sales: Loader::new(),
            active_sale: Loader::new(),
            active_user: Loader::new(),
            queued: vec![],
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn wallet(&self) -> Option<&Addr> {
        self.wallet.as_ref()
    }

    pub fn sale_minter(&self) -> SaleMinterContract {
        SaleMinterContract(self.config.sale_contract.clone())
    }

    pub fn collection(&self) -> &Loader<CollectionMetadata> {
        &self.collection
    }

    pub fn sales(&self) -> &Loader<Vec<SaleInfo>> {
        &self.sales
    }

    pub fn active_sale(&self) -> &Loader<SaleInfo> {
        &self.active_sale
    }

    pub fn active_user(&self) -> &Loader<UserWithAssets> {
        &self.active_user
    }

    /*** wallet and contract ***/

    pub fn connect_wallet(&mut self, wallet: &str) -> StdResult<()> {
        let wallet = self.api.addr_validate(&wallet.to_lowercase())?;
        self.api
            .debug(&format!("storefront: wallet connected {}", wallet));
        self.wallet = Some(wallet);
        self.rekey_user();
        Ok(())
    }

    pub fn disconnect_wallet(&mut self) {
        self.wallet = None;
        self.rekey_user();
    }

    /// Points the user loader at the current wallet right away, so nothing derived
    /// from the previous wallet's assets survives the switch.
    fn rekey_user(&mut self) {
        if let Some(request) = self.watch(Slot::ActiveUser) {
            self.queued.push(request);
        }
    }

    /// Looks the sale-minter contract up on chain. The page keeps loading until this succeeds.
    pub fn connect_contract<C: CustomQuery>(
        &mut self,
        querier: &QuerierWrapper<C>,
    ) -> Result<ContractVersion, StorefrontError> {
        let version = self.sale_minter().contract_version(querier)?;
        self.api.debug(&format!(
            "storefront: sale minter {} is {} {}",
            self.config.sale_contract, version.contract, version.version
        ));
        self.contract = Some(version.clone());
        Ok(version)
    }

    pub fn contract(&self) -> Option<&ContractVersion> {
        self.contract.as_ref()
    }

    /*** fetching ***/

    fn endpoint(&self, slot: Slot) -> Option<Endpoint> {
        let collection = self.config.collection.clone();
        match slot {
            Slot::Collection => Some(Endpoint::CollectionMetadata { collection }),
            Slot::Sales => Some(Endpoint::Sales { collection }),
            Slot::ActiveSale => Some(Endpoint::ActiveSale { collection }),
            Slot::ActiveUser => self.wallet.clone().map(|wallet| Endpoint::UserAssets {
                wallet,
                collection,
            }),
        }
    }

    fn watch(&mut self, slot: Slot) -> Option<PendingRequest> {
        let key = self
            .endpoint(slot)
            .map(|endpoint| endpoint.url(&self.config.api_base_url));
        let ticket = match slot {
            Slot::Collection => self.collection.watch(key),
            Slot::Sales => self.sales.watch(key),
            Slot::ActiveSale => self.active_sale.watch(key),
            Slot::ActiveUser => self.active_user.watch(key),
        }?;
        self.api
            .debug(&format!("storefront: fetching {} from {}", slot, ticket.url));
        Some(PendingRequest { slot, ticket })
    }

    fn is_current(&self, request: &PendingRequest) -> bool {
        let ticket = &request.ticket;
        match request.slot {
            Slot::Collection => self.collection.is_current(ticket),
            Slot::Sales => self.sales.is_current(ticket),
            Slot::ActiveSale => self.active_sale.is_current(ticket),
            Slot::ActiveUser => self.active_user.is_current(ticket),
        }
    }

    /// Issues requests for every loader whose key changed since the last poll.
    /// The first poll fetches everything, later polls only follow wallet changes.
    pub fn poll(&mut self) -> Vec<PendingRequest> {
        let mut pending: Vec<PendingRequest> = std::mem::take(&mut self.queued)
            .into_iter()
            .filter(|request| self.is_current(request))
            .collect();
        for slot in Slot::ALL {
            if let Some(request) = self.watch(slot) {
                pending.push(request);
            }
        }
        pending
    }

    /// Hands a response back. Returns false when it was dropped because the request
    /// was superseded or the storefront is closed.
    pub fn complete(
        &mut self,
        request: &PendingRequest,
        body: Result<Binary, TransportError>,
    ) -> bool {
        let ticket = &request.ticket;
        let applied = match request.slot {
            Slot::Collection => self.collection.resolve(ticket, body),
            Slot::Sales => self.sales.resolve(ticket, body),
            Slot::ActiveSale => self.active_sale.resolve(ticket, body),
            Slot::ActiveUser => self.active_user.resolve(ticket, body),
        };
        if !applied {
            self.api.debug(&format!(
                "storefront: dropped stale {} response from {}",
                request.slot, ticket.url
            ));
        } else if let Some(err) = self.error(request.slot) {
            self.api.debug(&format!(
                "storefront: error fetching from {}: {}",
                ticket.url, err
            ));
        }
        applied
    }

    /// Runs all pending requests to completion on the calling thread
    pub fn refresh<T: Transport + ?Sized>(&mut self, transport: &T) {
        for request in self.poll() {
            let body = transport.get(request.url());
            self.complete(&request, body);
        }
    }

    /// Teardown: in-flight responses are discarded from now on
    pub fn close(&mut self) {
        self.collection.close();
        self.sales.close();
        self.active_sale.close();
        self.active_user.close();
        self.queued.clear();
    }

    pub fn error(&self, slot: Slot) -> Option<&FetchError> {
        match slot {
            Slot::Collection => self.collection.error(),
            Slot::Sales => self.sales.error(),
            Slot::ActiveSale => self.active_sale.error(),
            Slot::ActiveUser => self.active_user.error(),
        }
    }

    /*** derived state ***/

    pub fn eligibility(&self, now: DateTime<Utc>) -> Result<Eligibility, StorefrontError> {
        Eligibility::compute(&EligibilityInputs {
            sales: &self.sales,
            active_sale: &self.active_sale,
            active_user: &self.active_user,
            contract_connected: self.contract.is_some(),
            quantity: self.quantity,
            now,
        })
    }

    pub fn increment_quantity(&mut self, now: DateTime<Utc>) -> Result<u32, StorefrontError> {
        let e = self.eligibility(now)?;
        if e.quantity.can_increment(e.avail_to_mint_by_user, e.is_sold_out) {
            self.quantity = e.quantity.increment(e.avail_to_mint_by_user);
        }
        Ok(self.quantity.get())
    }

    pub fn decrement_quantity(&mut self, now: DateTime<Utc>) -> Result<u32, StorefrontError> {
        let e = self.eligibility(now)?;
        if e.quantity.can_decrement(e.is_sold_out) {
            self.quantity = e.quantity.decrement(e.avail_to_mint_by_user);
        }
        Ok(self.quantity.get())
    }

    pub fn view(&self, now: DateTime<Utc>) -> Result<StorefrontView, StorefrontError> {
        let e = self.eligibility(now)?;
        Ok(StorefrontView {
            header: Header::new(&self.collection, &self.active_user),
            summary: SaleSummary::new(&e),
            stage: Stage::from_eligibility(&e),
        })
    }

    /*** submit ***/

    /// Builds the mint call for the selected quantity, paying the matching price.
    pub fn mint(&self, now: DateTime<Utc>) -> Result<CosmosMsg, StorefrontError> {
        let wallet = self
            .wallet
            .as_ref()
            .ok_or(StorefrontError::WalletNotConnected {})?;
        if self.contract.is_none() {
            return Err(StorefrontError::ContractNotConnected {});
        }
        let e = self.eligibility(now)?;
        if e.is_loading {
            return Err(StorefrontError::CannotMint {
                reason: ButtonLabel::Checking.to_string(),
            });
        }
        if !e.can_claim {
            return Err(StorefrontError::CannotMint {
                reason: ButtonLabel::from_eligibility(&e).to_string(),
            });
        }
        let sale = self
            .active_sale
            .data()
            .ok_or(StorefrontError::NoActiveSale {})?;
        let price = e.price.ok_or(StorefrontError::NoActiveSale {})?;
        let denom = self
            .config
            .payment_denom
            .clone()
            .unwrap_or_else(|| sale.currency_symbol.clone());

        self.api.debug(&format!(
            "storefront: {} mints {} from sale {} for {}",
            wallet,
            e.quantity.get(),
            sale.id,
            price
        ));
        Ok(self
            .sale_minter()
            .mint(e.quantity.get(), price.funds(&denom))?)
    }

    /// Maps the outcome of the submitted mint transaction to the toast to show
    pub fn mint_notification<T, E: fmt::Display>(&self, result: &Result<T, E>) -> Notification {
        match result {
            Ok(_) => Notification::minted(),
            Err(err) => {
                self.api
                    .debug(&format!("storefront: mint failed: {}", err));
                Notification::mint_failed(err)
            }
        }
    }
}
