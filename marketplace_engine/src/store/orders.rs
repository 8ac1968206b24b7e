use log::*;

use super::{paginate, sorted_values, MarketStore, Page, StoreState};
use crate::{
    db_types::{Payment, PaymentAccountLedgerEntry, ReceiptUpdate, Shipment, ShopReceipt, Transaction},
    helpers::now_unix,
};

/// Receipts are filed under the shop owner's user id. Some older fixtures used the shop id itself, so both match.
fn is_shop_seller(state: &StoreState, shop_id: i64, seller_user_id: i64) -> bool {
    seller_user_id == shop_id || state.shops.get(&shop_id).map_or(false, |s| s.user_id == seller_user_id)
}

fn transactions_for_receipt(state: &StoreState, receipt_id: i64) -> Vec<Transaction> {
    sorted_values(state.transactions.values().filter(|t| t.receipt_id == receipt_id), |t| t.transaction_id)
}

/// Fills in the receipt's transactions from the transaction index.
fn project(state: &StoreState, receipt: &ShopReceipt) -> ShopReceipt {
    let mut receipt = receipt.clone();
    receipt.transactions = transactions_for_receipt(state, receipt.receipt_id);
    receipt
}

impl MarketStore {
    /// Stores the receipt. Its transactions are moved into the transaction index and re-attached on every read.
    pub fn insert_receipt(&self, mut receipt: ShopReceipt) {
        self.reserve_id(receipt.receipt_id);
        let transactions = std::mem::take(&mut receipt.transactions);
        let mut state = self.write();
        for mut transaction in transactions {
            self.reserve_id(transaction.transaction_id);
            transaction.receipt_id = receipt.receipt_id;
            state.transactions.insert(transaction.transaction_id, transaction);
        }
        state.receipts.insert(receipt.receipt_id, receipt);
    }

    pub fn receipt(&self, receipt_id: i64) -> Option<ShopReceipt> {
        let state = self.read();
        state.receipts.get(&receipt_id).map(|r| project(&state, r))
    }

    pub fn shop_receipts(&self, shop_id: i64, limit: usize, offset: usize) -> Page<ShopReceipt> {
        let state = self.read();
        let receipts = sorted_values(
            state.receipts.values().filter(|r| is_shop_seller(&state, shop_id, r.seller_user_id)),
            |r| r.receipt_id,
        );
        let page = paginate(receipts, limit, offset);
        Page { results: page.results.iter().map(|r| project(&state, r)).collect(), total: page.total }
    }

    /// Applies the `Some` fields of `update` and refreshes the receipt's update timestamps.
    pub fn update_receipt(&self, receipt_id: i64, update: ReceiptUpdate) -> Option<ShopReceipt> {
        let mut state = self.write();
        let receipt = state.receipts.get_mut(&receipt_id)?;
        if update.message_from_seller.is_some() {
            receipt.message_from_seller = update.message_from_seller;
        }
        if let Some(shipped) = update.is_shipped {
            receipt.is_shipped = shipped;
        }
        if let Some(paid) = update.is_paid {
            receipt.is_paid = paid;
        }
        let now = now_unix();
        receipt.update_timestamp = now;
        receipt.updated_timestamp = now;
        debug!("🗃️ Receipt {receipt_id} updated");
        let receipt = receipt.clone();
        Some(project(&state, &receipt))
    }

    /// Records a shipment against the receipt and marks it as shipped.
    pub fn add_receipt_shipment(&self, receipt_id: i64, carrier_name: &str, tracking_code: &str) -> Option<ShopReceipt> {
        let shipment_id = self.next_id();
        let mut state = self.write();
        let receipt = state.receipts.get_mut(&receipt_id)?;
        let now = now_unix();
        receipt.shipments.push(Shipment {
            receipt_shipping_id: Some(shipment_id),
            shipment_notification_timestamp: now,
            carrier_name: carrier_name.to_string(),
            tracking_code: tracking_code.to_string(),
        });
        receipt.is_shipped = true;
        receipt.update_timestamp = now;
        receipt.updated_timestamp = now;
        info!("🗃️ Receipt {receipt_id} shipped with {carrier_name} ({tracking_code})");
        let receipt = receipt.clone();
        Some(project(&state, &receipt))
    }

    //--------------------------------------     Transactions      -----------------------------------------------------
    pub fn transaction(&self, transaction_id: i64) -> Option<Transaction> {
        self.read().transactions.get(&transaction_id).cloned()
    }

    pub fn receipt_transactions(&self, receipt_id: i64) -> Vec<Transaction> {
        transactions_for_receipt(&self.read(), receipt_id)
    }

    pub fn shop_transactions(&self, shop_id: i64, limit: usize, offset: usize) -> Page<Transaction> {
        let state = self.read();
        let transactions = sorted_values(
            state.transactions.values().filter(|t| is_shop_seller(&state, shop_id, t.seller_user_id)),
            |t| t.transaction_id,
        );
        paginate(transactions, limit, offset)
    }

    //--------------------------------------       Payments        -----------------------------------------------------
    pub fn insert_payment(&self, payment: Payment) {
        self.reserve_id(payment.payment_id);
        self.write().payments.insert(payment.payment_id, payment);
    }

    pub fn receipt_payments(&self, receipt_id: i64) -> Vec<Payment> {
        let state = self.read();
        sorted_values(state.payments.values().filter(|p| p.receipt_id == receipt_id), |p| p.payment_id)
    }

    pub fn shop_payments(&self, shop_id: i64) -> Vec<Payment> {
        let state = self.read();
        sorted_values(state.payments.values().filter(|p| p.shop_id == shop_id), |p| p.payment_id)
    }

    //--------------------------------------        Ledger         -----------------------------------------------------
    /// Appends an entry to the shop's ledger. The store assigns the ledger id, the next sequence number and the
    /// running balance; `entry_id` is taken from the caller.
    pub fn append_ledger_entry(&self, shop_id: i64, mut entry: PaymentAccountLedgerEntry) -> PaymentAccountLedgerEntry {
        self.reserve_id(entry.entry_id);
        let mut state = self.write();
        let ledger = state.ledger.entry(shop_id).or_default();
        let (sequence, balance) = ledger.last().map_or((0, 0), |e| (e.sequence_number, e.balance));
        entry.ledger_id = shop_id;
        entry.sequence_number = sequence + 1;
        entry.balance = balance + entry.amount;
        ledger.push(entry.clone());
        entry
    }

    pub fn ledger_entries(&self, shop_id: i64, limit: usize, offset: usize) -> Page<PaymentAccountLedgerEntry> {
        let entries = self.read().ledger.get(&shop_id).cloned().unwrap_or_default();
        paginate(entries, limit, offset)
    }
}

#[cfg(test)]
mod test {
    use marketplace_common::Money;

    use super::*;
    use crate::db_types::Shop;

    fn store() -> MarketStore {
        let store = MarketStore::new();
        store.insert_shop(Shop { shop_id: 5001, user_id: 1001, ..Default::default() });
        store.insert_shop(Shop { shop_id: 5002, user_id: 1002, ..Default::default() });
        for (receipt_id, seller, transaction_id) in [(9001, 1001, 9201), (9002, 1001, 9202), (9003, 1002, 9203)] {
            store.insert_receipt(ShopReceipt {
                receipt_id,
                seller_user_id: seller,
                transactions: vec![Transaction {
                    transaction_id,
                    seller_user_id: seller,
                    price: Money::usd(100),
                    ..Default::default()
                }],
                ..Default::default()
            });
        }
        store
    }

    #[test]
    fn receipts_are_filed_under_the_shop_owner() {
        let store = store();
        let page = store.shop_receipts(5001, 25, 0);
        assert_eq!(page.total, 2);
        assert_eq!(page.results[0].receipt_id, 9001);
        assert_eq!(page.results[0].transactions.len(), 1);
        assert_eq!(store.shop_receipts(5002, 25, 0).total, 1);
        assert_eq!(store.shop_receipts(5001, 1, 1).results[0].receipt_id, 9002);
    }

    #[test]
    fn transactions_are_stored_once() {
        let store = store();
        let transaction = store.transaction(9201).unwrap();
        assert_eq!(transaction.receipt_id, 9001);
        assert_eq!(store.receipt(9001).unwrap().transactions, vec![transaction]);
        assert_eq!(store.receipt_transactions(9001).len(), 1);
        assert_eq!(store.shop_transactions(5001, 25, 0).total, 2);
        assert_eq!(store.shop_transactions(5002, 25, 0).results[0].transaction_id, 9203);
    }

    #[test]
    fn update_and_ship() {
        let store = store();
        let update = ReceiptUpdate { message_from_seller: Some("Thanks!".into()), ..Default::default() };
        let receipt = store.update_receipt(9002, update).unwrap();
        assert_eq!(receipt.message_from_seller.as_deref(), Some("Thanks!"));
        assert!(receipt.updated_timestamp > 0);
        assert_eq!(receipt.transactions.len(), 1);
        let receipt = store.add_receipt_shipment(9002, "USPS", "9400").unwrap();
        assert!(receipt.is_shipped);
        assert_eq!(receipt.shipments.len(), 1);
        assert_eq!(receipt.shipments[0].tracking_code, "9400");
        assert!(store.add_receipt_shipment(1, "USPS", "1").is_none());
    }

    #[test]
    fn ledger_sequence_and_balance() {
        let store = store();
        let credit = PaymentAccountLedgerEntry { entry_id: 12001, amount: 4953, ..Default::default() };
        let debit = PaymentAccountLedgerEntry { entry_id: 12002, amount: -345, ..Default::default() };
        store.append_ledger_entry(5001, credit);
        let debit = store.append_ledger_entry(5001, debit);
        assert_eq!(debit.sequence_number, 2);
        assert_eq!(debit.balance, 4608);
        assert_eq!(debit.ledger_id, 5001);
        let page = store.ledger_entries(5001, 1, 1);
        assert_eq!(page.total, 2);
        assert_eq!(page.results[0].entry_id, 12002);
        assert_eq!(store.ledger_entries(5002, 25, 0).total, 0);
    }
}
