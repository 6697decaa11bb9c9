#![allow(dead_code, reason = "fixtures are only navigated through stand-ins")]

use core::marker::PhantomData;
use core::num::NonZeroI32;
use std::collections::HashSet;
use std::time::SystemTime;

use crate::chain::{Outcome, StandIn, any};
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{
    CollectionInfo, CollectionKind, InfoKind, Receiver, TerminalKind, TypeInfo, Typed, Visibility,
};
use crate::proxy::{AnyEntity, MemberRef, Navigable, Proxy, RootProxy, Shape};
use crate::{
    AccessorConvention, ConstructionError, Elements, NameStyle, PropertyError, ProxyConfig,
    ProxyRegistry, Terminal, navigable,
};

// -----------------------------------------------------------------------------
// Fixtures

pub struct AbstractEntity;

#[navigable]
impl AbstractEntity {
    pub fn get_version(&self) -> u32 {
        unimplemented!()
    }

    pub fn is_archived(&self) -> bool {
        unimplemented!()
    }
}

pub struct Address;

#[navigable]
impl Address {
    pub fn get_city(&self) -> &str {
        unimplemented!()
    }

    pub fn get_numbers(&self) -> Vec<i32> {
        unimplemented!()
    }

    pub fn city_code(&self) -> u32 {
        unimplemented!()
    }

    pub fn get_floor(&self) -> NonZeroI32 {
        unimplemented!()
    }
}

pub struct BusinessPartner;

#[navigable(auto_register)]
impl BusinessPartner {
    pub fn get_legal_name(&self) -> &str {
        unimplemented!()
    }

    pub fn get_addresses(&self) -> &[Address] {
        unimplemented!()
    }

    pub fn get_acronym(&self) -> Option<&str> {
        unimplemented!()
    }
}

pub struct ContractPosition;

#[navigable]
impl ContractPosition {
    pub fn get_price(&self) -> f64 {
        unimplemented!()
    }
}

#[navigable]
pub trait Shipment {
    fn get_carrier(&self) -> String;

    fn get_destination(&self) -> &Address;

    fn into_label(self) -> String
    where
        Self: Sized;
}

#[derive(Terminal)]
pub enum Status {
    Open,
    Closed,
}

#[derive(Terminal)]
#[terminal(kind = "numeric")]
pub struct Money(i64);

// A collection that does not describe its elements.
pub struct RawBag;

impl Typed for RawBag {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Collection(CollectionInfo::untyped::<Self>(CollectionKind::List)))
    }
}

impl Shape for RawBag {
    type Output = Elements<RootProxy>;

    fn materialize(outcome: Outcome) -> Self::Output {
        outcome.into_elements::<AnyEntity>(Self::type_info())
    }
}

pub struct Contract;

#[navigable(extends = AbstractEntity, auto_register)]
impl Contract {
    pub fn new() -> Self {
        Self
    }

    pub fn get_customer(&self) -> &BusinessPartner {
        unimplemented!()
    }

    pub fn get_positions(&self) -> &[ContractPosition] {
        unimplemented!()
    }

    pub fn get_tags(&self) -> &HashSet<String> {
        unimplemented!()
    }

    pub fn get_shipment(&self) -> Option<&dyn Shipment> {
        unimplemented!()
    }

    pub fn get_creation_day(&self) -> SystemTime {
        unimplemented!()
    }

    pub fn get_status(&self) -> Status {
        unimplemented!()
    }

    pub fn get_total(&self) -> Money {
        unimplemented!()
    }

    pub fn get_attachments(&self) -> &RawBag {
        unimplemented!()
    }

    #[navigable(sealed)]
    pub fn get_audit_trail(&self) -> String {
        unimplemented!()
    }

    pub fn is_valid_at(&self, _at: SystemTime) -> bool {
        unimplemented!()
    }

    pub fn is_tagged(&self) -> String {
        unimplemented!()
    }

    pub fn set_version(&mut self, _version: u32) {
        unimplemented!()
    }

    fn internal_code(&self) -> u32 {
        unimplemented!()
    }
}

pub struct SalesContract;

#[navigable(extends = Contract, proxy = SalesProxy)]
impl SalesContract {
    pub fn get_discount(&self) -> f64 {
        unimplemented!()
    }
}

pub struct Ledger;

#[navigable(sealed, auto_register)]
impl Ledger {
    pub fn get_balance(&self) -> f64 {
        unimplemented!()
    }
}

pub struct Page<T>(PhantomData<T>);

#[navigable]
impl<T: Navigable> Page<T> {
    pub fn get_items(&self) -> &Vec<T> {
        unimplemented!()
    }

    pub fn get_size(&self) -> usize {
        unimplemented!()
    }
}

// -----------------------------------------------------------------------------
// Generated descriptions

#[test]
fn describes_methods() {
    let info = Contract::type_info().as_entity().unwrap();
    assert!(info.extends(AbstractEntity::type_info().ty()));
    assert!(info.extends(AnyEntity::type_info().ty()));

    let new = info.method("new").unwrap();
    assert!(new.is_static());

    let setter = info.method("set_version").unwrap();
    assert_eq!(setter.receiver(), Receiver::Mut);
    assert_eq!(setter.arity(), 1);
    assert!(setter.returns().is_none());

    let internal = info.method("internal_code").unwrap();
    assert_eq!(internal.visibility(), Visibility::Private);

    assert!(info.method("get_audit_trail").unwrap().is_sealed());

    let positions = info.method("get_positions").unwrap().returns().unwrap();
    assert_eq!(positions.kind(), InfoKind::Collection);

    let total = info.method("get_total").unwrap().returns().unwrap();
    assert_eq!(total.as_terminal().unwrap().kind(), TerminalKind::Numeric);
    let status = info.method("get_status").unwrap().returns().unwrap();
    assert_eq!(status.as_terminal().unwrap().kind(), TerminalKind::Enumeration);

    let shipment = <dyn Shipment as Typed>::type_info().as_entity().unwrap();
    assert!(shipment.method("get_carrier").is_some());
    assert!(shipment.method("into_label").is_none());

    assert!(Ledger::type_info().as_entity().unwrap().is_sealed());
}

// -----------------------------------------------------------------------------
// Single accessors

#[test]
fn simple_names() {
    let registry = ProxyRegistry::new();

    assert_eq!(registry.name_of(ContractProxy::get_customer).unwrap(), "customer");
    assert_eq!(
        registry.name_of(ContractProxy::get_creation_day).unwrap(),
        "creationDay"
    );
    assert_eq!(registry.name_of(ContractProxy::get_status).unwrap(), "status");
    assert_eq!(registry.name_of(ContractProxy::get_total).unwrap(), "total");
    assert_eq!(registry.name_of(BusinessPartnerProxy::get_acronym).unwrap(), "acronym");
    assert_eq!(registry.name_of(ShipmentProxy::get_carrier).unwrap(), "carrier");
    assert_eq!(registry.name_of(AddressProxy::get_floor).unwrap(), "floor");
}

#[test]
fn inherited_accessors() {
    let registry = ProxyRegistry::new();

    assert_eq!(registry.name_of(|c: &ContractProxy| c.get_version()).unwrap(), "version");
    assert_eq!(registry.name_of(|c: &ContractProxy| c.is_archived()).unwrap(), "archived");
    assert_eq!(
        registry
            .name_of(|s: &SalesProxy| s.get_customer().get_legal_name())
            .unwrap(),
        "customer.legalName"
    );
    assert_eq!(registry.name_of(SalesProxy::get_discount).unwrap(), "discount");
}

#[test]
fn subtype_stand_in() {
    let registry = ProxyRegistry::new();

    let target = registry
        .resolve(&|s: &SalesProxy| s.get_version())
        .unwrap();
    assert!(target.ty().is::<SalesContract>());

    let chain = registry.chain();
    let sales = chain.of_type::<SalesContract>().unwrap();
    assert_eq!(sales.get_type_path(), Some(SalesContract::type_info().type_path()));
    assert_eq!(chain.name(sales.get_customer()).unwrap(), "customer");
}

#[test]
fn name_cache() {
    let registry = ProxyRegistry::new();

    let first = registry.name_of(ContractProxy::get_customer).unwrap();
    let second = registry.name_of(ContractProxy::get_customer).unwrap();
    assert_eq!(first, second);
    assert_eq!(registry.cached_names(), 1);

    registry.clear_name_cache();
    assert_eq!(registry.cached_names(), 0);

    let uncached = ProxyRegistry::with_config(ProxyConfig::new().with_name_cache(false));
    assert_eq!(uncached.name_of(ContractProxy::get_customer).unwrap(), "customer");
    assert_eq!(uncached.cached_names(), 0);
}

#[test]
fn configured_names() {
    let snake = ProxyRegistry::with_config(ProxyConfig::new().with_naming(NameStyle::Snake));
    assert_eq!(
        snake.name_of(ContractProxy::get_creation_day).unwrap(),
        "creation_day"
    );

    let prefixed = ProxyRegistry::new();
    assert_eq!(
        prefixed.name_of(AddressProxy::city_code),
        Err(PropertyError::NonAccessorInvoked {
            type_path: Address::type_info().type_path(),
            method: "city_code",
        })
    );

    let bare = ProxyRegistry::with_config(
        ProxyConfig::new().with_convention(AccessorConvention::Bare),
    );
    assert_eq!(bare.name_of(AddressProxy::city_code).unwrap(), "cityCode");
    assert_eq!(bare.name_of(AddressProxy::get_city).unwrap(), "city");
}

// -----------------------------------------------------------------------------
// Chains

#[test]
fn nested_paths() {
    let registry = ProxyRegistry::new();
    let chain = registry.chain();

    let name = chain.of(ContractProxy::get_customer).unwrap().get_legal_name();
    assert_eq!(chain.peek().as_deref(), Some("customer.legalName"));
    assert_eq!(chain.name(name).unwrap(), "customer.legalName");

    let destination = chain
        .of(ContractProxy::get_shipment)
        .unwrap()
        .get_destination()
        .get_city();
    assert_eq!(chain.name(destination).unwrap(), "shipment.destination.city");

    let contract = chain.of_type::<Contract>().unwrap();
    assert!(chain.is_empty());
    let acronym = contract.get_customer().get_acronym();
    assert_eq!(chain.name(acronym).unwrap(), "customer.acronym");
}

#[test]
fn collection_paths() {
    let registry = ProxyRegistry::new();
    let chain = registry.chain();

    let positions = chain.of(ContractProxy::get_positions).unwrap();
    assert_eq!(positions.kind(), CollectionKind::List);
    assert_eq!(positions.len(), 1);
    assert!(positions.first().is_some_and(|p| p.stand_in().is_live()));
    let price = any(positions).unwrap().get_price();
    assert_eq!(chain.name(price).unwrap(), "positions.price");

    let addresses = chain.of(ContractProxy::get_customer).unwrap().get_addresses();
    let city = any(addresses).unwrap().get_city();
    assert_eq!(chain.name(city).unwrap(), "customer.addresses.city");

    let tags = chain.of(ContractProxy::get_tags).unwrap();
    assert_eq!(tags.kind(), CollectionKind::Set);
    assert!(tags.is_empty());
    assert!(tags.first().is_none());
    assert_eq!(chain.name(tags).unwrap(), "tags");
}

#[test]
fn any_inside_accessor() {
    let registry = ProxyRegistry::new();

    let target = registry
        .resolve(&|c: &ContractProxy| any(c.get_positions()).unwrap().get_price())
        .unwrap();
    assert!(target.ty().is::<Contract>());

    assert_eq!(
        registry
            .name_of(|c: &ContractProxy| any(c.get_positions()).unwrap().get_price())
            .unwrap(),
        "positions.price"
    );

    let chain = registry.chain();
    let city = chain
        .of(|c: &ContractProxy| any(c.get_customer().get_addresses()).unwrap().get_city())
        .unwrap();
    assert_eq!(chain.name(city).unwrap(), "customer.addresses.city");
}

#[test]
fn terminal_elements() {
    let registry = ProxyRegistry::new();
    let chain = registry.chain();

    let numbers = chain.of(AddressProxy::get_numbers).unwrap();
    let err = any(numbers).unwrap_err();
    assert!(matches!(err, PropertyError::UnsupportedTarget { .. }));
    assert_eq!(chain.name(()), Err(err));
}

#[test]
fn generic_entities() {
    let registry = ProxyRegistry::new();

    assert_eq!(
        registry.name_of(|p: &PageProxy<Contract>| p.get_size()).unwrap(),
        "size"
    );

    let chain = registry.chain();
    let items = chain.of(PageProxy::<ContractPosition>::get_items).unwrap();
    let price = any(items).unwrap().get_price();
    assert_eq!(chain.name(price).unwrap(), "items.price");

    assert_ne!(
        Page::<Contract>::type_info().ty_id(),
        Page::<ContractPosition>::type_info().ty_id()
    );
}

#[test]
fn drain_clears() {
    let registry = ProxyRegistry::new();
    let chain = registry.chain();

    assert_eq!(chain.name(()), Err(PropertyError::NoPropertyRecorded));

    let customer = chain.of(ContractProxy::get_customer).unwrap();
    assert_eq!(chain.name(customer).unwrap(), "customer");
    assert!(chain.is_empty());
    assert_eq!(chain.name(()), Err(PropertyError::NoPropertyRecorded));
}

#[test]
fn independent_chains() {
    let registry = ProxyRegistry::new();
    let first = registry.chain();
    let second = registry.chain();

    let customer = first.of(ContractProxy::get_customer).unwrap();
    let positions = second.of(ContractProxy::get_positions).unwrap();

    assert_eq!(second.name(positions).unwrap(), "positions");
    assert_eq!(first.name(customer).unwrap(), "customer");
}

// -----------------------------------------------------------------------------
// Stand-in identity

#[test]
fn one_instance_per_type() {
    let registry = ProxyRegistry::new();
    let chain = registry.chain();

    let first = chain.of(ContractProxy::get_customer).unwrap();
    let second = chain.of(ContractProxy::get_customer).unwrap();
    let direct = chain.of_type::<BusinessPartner>().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.identity(), direct.identity());
    drop(chain.name(()));

    // Contract and BusinessPartner.
    assert_eq!(registry.cached_stand_ins(), 2);
    assert_eq!(registry.cached_classes(), 2);
}

#[test]
fn shared_across_threads() {
    let registry = ProxyRegistry::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            std::thread::spawn(move || {
                let chain = registry.chain();
                let customer = chain.of(ContractProxy::get_customer).unwrap();
                let identity = customer.identity();
                assert_eq!(chain.name(customer.get_legal_name()).unwrap(), "customer.legalName");
                identity
            })
        })
        .collect();

    let identities: HashSet<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(identities.len(), 1);
    assert_eq!(registry.cached_stand_ins(), 2);
}

// -----------------------------------------------------------------------------
// Failures

#[test]
fn root_members_unsupported() {
    let registry = ProxyRegistry::new();

    let err = registry.name_of(|c: &ContractProxy| c.identity()).unwrap_err();
    assert_eq!(
        err,
        PropertyError::UnsupportedTarget {
            type_path: AnyEntity::type_info().type_path(),
            reason: "methods declared by the root type are unsupported",
        }
    );

    let err = registry.name_of(|_: &ContractProxy| 0).unwrap_err();
    assert!(matches!(err, PropertyError::UnsupportedTarget { .. }));
}

#[test]
fn sealed_targets() {
    let registry = ProxyRegistry::new();

    let err = registry.name_of(ContractProxy::get_audit_trail).unwrap_err();
    assert!(matches!(err, PropertyError::UnsupportedTarget { .. }));

    let err = registry.name_of(LedgerProxy::get_balance).unwrap_err();
    assert!(matches!(err, PropertyError::UnsupportedTarget { .. }));

    let chain = registry.chain();
    assert!(chain.of_type::<Ledger>().is_err());
    assert!(matches!(chain.name(()), Err(PropertyError::UnsupportedTarget { .. })));
}

#[test]
fn non_accessors_fail_loudly() {
    let registry = ProxyRegistry::new();
    let expected = PropertyError::NonAccessorInvoked {
        type_path: Contract::type_info().type_path(),
        method: "is_valid_at",
    };

    let chain = registry.chain();
    let contract = chain.of_type::<Contract>().unwrap();
    assert_eq!(contract.is_valid_at(SystemTime::UNIX_EPOCH), Err(expected.clone()));
    assert_eq!(chain.name(()), Err(expected.clone()));

    assert_eq!(
        registry.name_of(|c: &ContractProxy| c.is_valid_at(SystemTime::UNIX_EPOCH)),
        Err(expected)
    );

    // `is_` only names booleans.
    assert_eq!(
        registry.name_of(ContractProxy::is_tagged),
        Err(PropertyError::NonAccessorInvoked {
            type_path: Contract::type_info().type_path(),
            method: "is_tagged",
        })
    );
    assert!(matches!(
        registry.name_of(|c: &ContractProxy| c.set_version(2)),
        Err(PropertyError::NonAccessorInvoked { .. })
    ));
}

#[test]
fn untyped_collection() {
    let registry = ProxyRegistry::new();

    assert_eq!(
        registry.name_of(ContractProxy::get_attachments),
        Err(PropertyError::UnsupportedElementShape {
            type_path: Contract::type_info().type_path(),
            property: "attachments".to_owned(),
        })
    );
}

#[test]
fn unread_path_continues() {
    let registry = ProxyRegistry::new();
    let chain = registry.chain();

    let customer = chain.of(ContractProxy::get_customer).unwrap();
    let name = customer.get_legal_name();
    assert_eq!(name, "");
    let status = chain.of(ContractProxy::get_status).unwrap();
    assert!(status.is_none());
    assert_eq!(chain.name(status).unwrap(), "customer.legalName.status");
}

#[test]
fn pool_exhaustion() {
    let registry = ProxyRegistry::with_config(ProxyConfig::new().with_max_stand_ins(1));

    assert_eq!(
        registry.name_of(|c: &ContractProxy| c.get_version()).unwrap(),
        "version"
    );
    assert_eq!(
        registry.name_of(ContractProxy::get_customer),
        Err(PropertyError::ProxyConstructionFailure {
            type_path: BusinessPartner::type_info().type_path(),
            source: ConstructionError::PoolExhausted { limit: 1 },
        })
    );
    assert_eq!(registry.cached_stand_ins(), 1);
}

// -----------------------------------------------------------------------------
// Registration

#[cfg(feature = "auto_register")]
#[test]
fn auto_register() {
    let registry = ProxyRegistry::new();
    assert!(registry.auto_register());

    // `Ledger` is sealed and skipped.
    assert_eq!(registry.cached_classes(), 2);
    let class = registry.stand_in_class(Contract::type_info()).unwrap();
    assert!(class.intercept("get_version").is_some());
    assert_eq!(registry.cached_classes(), 2);
}

#[test]
fn class_layout() {
    let registry = ProxyRegistry::new();
    let class = registry.stand_in_class(SalesContract::type_info()).unwrap();

    let lineage = class.lineage();
    assert_eq!(lineage.len(), 3);
    assert!(lineage[0].is::<SalesContract>());
    assert!(lineage[1].is::<Contract>());
    assert!(lineage[2].is::<AbstractEntity>());

    let properties: HashSet<&str> = class.properties().collect();
    assert!(properties.contains("discount"));
    assert!(properties.contains("customer"));
    assert!(properties.contains("version"));
    assert!(!properties.contains("auditTrail"));
    assert!(!properties.contains("validAt"));
}

#[test]
fn stand_in_outcomes() {
    let registry = ProxyRegistry::new();
    let chain = registry.chain();
    let customer = MemberRef::new::<Contract>("get_customer");

    let contract = chain.of_type::<Contract>().unwrap();
    assert!(contract.stand_in().is_live());
    let outcome = contract.stand_in().invoke(customer);
    assert!(outcome.error().is_none());
    assert_eq!(outcome.member(), customer);
    assert_eq!(chain.peek().as_deref(), Some("customer"));

    let detached = StandIn::detached(chain.clone());
    assert!(!detached.is_live());
    let outcome = detached.invoke(customer);
    assert!(matches!(
        outcome.error(),
        Some(PropertyError::UnsupportedTarget { .. })
    ));
    assert!(chain.name(()).is_err());
}

#[test]
fn proxies_compare_by_stand_in() {
    let registry = ProxyRegistry::new();
    let chain = registry.chain();

    let contract = chain.of_type::<Contract>().unwrap();
    let same = ContractProxy::from_stand_in(contract.stand_in().clone());
    assert_eq!(contract, same);
    assert_ne!(contract.identity(), chain.of_type::<Address>().unwrap().identity());
    assert_eq!(registry.cached_stand_ins(), 2);
}
