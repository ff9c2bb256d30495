//! In-memory implementation of every storage port, shared by service tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use sweetshop_domain::error::SweetShopError;
use sweetshop_domain::id::{SweetId, VendorId, VendorSweetId};
use sweetshop_domain::sweet::{NewSweet, Sweet};
use sweetshop_domain::vendor::{NewVendor, Vendor};
use sweetshop_domain::vendor_sweet::{NewVendorSweet, SweetOffering, VendorSweet};

use crate::ports::{SweetRepository, VendorRepository, VendorSweetRepository};

#[derive(Default)]
struct Tables {
    next_id: i64,
    sweets: BTreeMap<SweetId, Sweet>,
    vendors: BTreeMap<VendorId, Vendor>,
    vendor_sweets: BTreeMap<VendorSweetId, VendorSweet>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Cloneable handle over one shared set of tables.
#[derive(Clone, Default)]
pub(crate) struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub(crate) fn vendor_sweet_count(&self) -> usize {
        self.tables.lock().unwrap().vendor_sweets.len()
    }
}

impl SweetRepository for InMemoryStore {
    fn create(&self, sweet: NewSweet) -> impl Future<Output = Result<Sweet, SweetShopError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let sweet = sweet.with_id(SweetId::new(tables.next_id()));
        tables.sweets.insert(sweet.id, sweet.clone());
        async { Ok(sweet) }
    }

    fn get_by_id(
        &self,
        id: SweetId,
    ) -> impl Future<Output = Result<Option<Sweet>, SweetShopError>> + Send {
        let result = self.tables.lock().unwrap().sweets.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Sweet>, SweetShopError>> + Send {
        let result: Vec<Sweet> = self.tables.lock().unwrap().sweets.values().cloned().collect();
        async { Ok(result) }
    }

    fn delete(&self, id: SweetId) -> impl Future<Output = Result<bool, SweetShopError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let removed = tables.sweets.remove(&id).is_some();
        if removed {
            tables.vendor_sweets.retain(|_, vs| vs.sweet_id != id);
        }
        async move { Ok(removed) }
    }
}

impl VendorRepository for InMemoryStore {
    fn create(
        &self,
        vendor: NewVendor,
    ) -> impl Future<Output = Result<Vendor, SweetShopError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let vendor = vendor.with_id(VendorId::new(tables.next_id()));
        tables.vendors.insert(vendor.id, vendor.clone());
        async { Ok(vendor) }
    }

    fn get_by_id(
        &self,
        id: VendorId,
    ) -> impl Future<Output = Result<Option<Vendor>, SweetShopError>> + Send {
        let result = self.tables.lock().unwrap().vendors.get(&id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Vendor>, SweetShopError>> + Send {
        let result: Vec<Vendor> = self.tables.lock().unwrap().vendors.values().cloned().collect();
        async { Ok(result) }
    }

    fn delete(&self, id: VendorId) -> impl Future<Output = Result<bool, SweetShopError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let removed = tables.vendors.remove(&id).is_some();
        if removed {
            tables.vendor_sweets.retain(|_, vs| vs.vendor_id != id);
        }
        async move { Ok(removed) }
    }
}

impl VendorSweetRepository for InMemoryStore {
    fn create(
        &self,
        vendor_sweet: NewVendorSweet,
    ) -> impl Future<Output = Result<VendorSweet, SweetShopError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let vendor_sweet = vendor_sweet.with_id(VendorSweetId::new(tables.next_id()));
        tables.vendor_sweets.insert(vendor_sweet.id, vendor_sweet);
        async move { Ok(vendor_sweet) }
    }

    fn get_by_id(
        &self,
        id: VendorSweetId,
    ) -> impl Future<Output = Result<Option<VendorSweet>, SweetShopError>> + Send {
        let result = self.tables.lock().unwrap().vendor_sweets.get(&id).copied();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<VendorSweet>, SweetShopError>> + Send {
        let result: Vec<VendorSweet> = self
            .tables
            .lock()
            .unwrap()
            .vendor_sweets
            .values()
            .copied()
            .collect();
        async { Ok(result) }
    }

    fn find_by_vendor(
        &self,
        vendor_id: VendorId,
    ) -> impl Future<Output = Result<Vec<SweetOffering>, SweetShopError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<SweetOffering> = tables
            .vendor_sweets
            .values()
            .filter(|vs| vs.vendor_id == vendor_id)
            .filter_map(|vs| {
                tables.sweets.get(&vs.sweet_id).map(|sweet| SweetOffering {
                    vendor_sweet: *vs,
                    sweet: sweet.clone(),
                })
            })
            .collect();
        async { Ok(result) }
    }

    fn delete(
        &self,
        id: VendorSweetId,
    ) -> impl Future<Output = Result<bool, SweetShopError>> + Send {
        let removed = self.tables.lock().unwrap().vendor_sweets.remove(&id).is_some();
        async move { Ok(removed) }
    }
}
