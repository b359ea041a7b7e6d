use chrono::Utc;

use recordworks_core::Entity;
use recordworks_finance::{
    Account, AccountKind, BankTransferProcessor, CryptoWalletProcessor, FinanceError,
    MobileMoneyProcessor, Transaction, TransactionId, TransactionProcessor, format_minor,
};
use recordworks_store::Repository;

/// Finance: run transactions through the three payment channels, apply them
/// to a savings account until funds run short, and record every transaction
/// in a keyed store.
pub fn run() -> anyhow::Result<()> {
    println!("=== Finance ===");

    let now = Utc::now();
    let t1 = Transaction::new(TransactionId::new(1), now, 12_000, "Groceries");
    let t2 = Transaction::new(TransactionId::new(2), now, 25_000, "Utilities");
    let t3 = Transaction::new(TransactionId::new(3), now, 9_000, "Entertainment");
    let t4 = Transaction::new(TransactionId::new(4), now, 80_000, "Rent");

    println!("{}", MobileMoneyProcessor.process(&t1));
    println!("{}", BankTransferProcessor.process(&t2));
    println!("{}", CryptoWalletProcessor.process(&t3));
    println!("{}", BankTransferProcessor.process(&t4));

    let mut account = Account::new("SA123456", AccountKind::Savings, 100_000);
    for tx in [&t1, &t2, &t3, &t4] {
        match account.apply(tx) {
            Ok(balance) => println!(
                "Transaction of {} applied. Updated balance: {}",
                format_minor(tx.amount_minor()),
                format_minor(balance)
            ),
            Err(err @ FinanceError::InsufficientFunds { .. }) => println!("{err}"),
        }
    }

    let mut ledger = Repository::new();
    for tx in [t1, t2, t3, t4] {
        ledger.add(tx)?;
    }

    println!("All transactions recorded:");
    for tx in ledger.snapshot() {
        println!(
            "\t{} {} {} ({})",
            tx.id(),
            tx.date().format("%Y-%m-%d"),
            format_minor(tx.amount_minor()),
            tx.category()
        );
    }

    Ok(())
}
