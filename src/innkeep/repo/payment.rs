use super::Repository;
use crate::model::{Payment, PaymentStatus, Period};
use crate::store::StorageBackend;

pub type PaymentRepository<B> = Repository<Payment, B>;

impl<B: StorageBackend> Repository<Payment, B> {
    pub fn for_tenant(&self, tenant_id: &str) -> Vec<Payment> {
        self.all()
            .into_iter()
            .filter(|payment| payment.tenant_id == tenant_id)
            .collect()
    }

    pub fn for_period(&self, period: Period) -> Vec<Payment> {
        self.all()
            .into_iter()
            .filter(|payment| payment.period == period)
            .collect()
    }

    pub fn with_status(&self, status: PaymentStatus) -> Vec<Payment> {
        self.all()
            .into_iter()
            .filter(|payment| payment.status == status)
            .collect()
    }

    /// Amount actually collected for a period (Paid records only).
    pub fn collected_for(&self, period: Period) -> f64 {
        self.for_period(period)
            .iter()
            .filter(|payment| payment.status == PaymentStatus::Paid)
            .map(|payment| payment.amount)
            .sum()
    }

    /// Payments recorded for a period that are still Unpaid or Late.
    pub fn outstanding_for(&self, period: Period) -> usize {
        self.for_period(period)
            .iter()
            .filter(|payment| payment.status != PaymentStatus::Paid)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentMethod;
    use crate::store::mem_backend::MemBackend;
    use chrono::{Month, NaiveDate};

    fn payment(id: &str, tenant_id: &str, period: Period, status: PaymentStatus) -> Payment {
        Payment {
            id: id.to_string(),
            tenant_id: tenant_id.to_string(),
            period,
            paid_on: NaiveDate::from_ymd_opt(2026, 2, 5).unwrap(),
            amount: 300.0,
            method: PaymentMethod::Cash,
            status,
        }
    }

    fn repo_with(payments: &[Payment]) -> PaymentRepository<MemBackend> {
        let mut repo = Repository::open(MemBackend::new()).unwrap();
        for p in payments {
            repo.create(p.clone()).unwrap();
        }
        repo
    }

    #[test]
    fn filters_by_tenant_and_period() {
        let feb = Period::new(Month::February, 2026);
        let mar = Period::new(Month::March, 2026);
        let repo = repo_with(&[
            payment("P001", "T001", feb, PaymentStatus::Paid),
            payment("P002", "T002", feb, PaymentStatus::Unpaid),
            payment("P003", "T001", mar, PaymentStatus::Paid),
        ]);

        assert_eq!(repo.for_tenant("T001").len(), 2);
        assert_eq!(repo.for_period(feb).len(), 2);
        assert_eq!(repo.with_status(PaymentStatus::Unpaid).len(), 1);
    }

    #[test]
    fn collected_sums_paid_records_only() {
        let feb = Period::new(Month::February, 2026);
        let repo = repo_with(&[
            payment("P001", "T001", feb, PaymentStatus::Paid),
            payment("P002", "T002", feb, PaymentStatus::Late),
            payment("P003", "T003", feb, PaymentStatus::Paid),
        ]);

        assert_eq!(repo.collected_for(feb), 600.0);
        assert_eq!(repo.outstanding_for(feb), 1);
    }

    #[test]
    fn orphaned_tenant_reference_is_tolerated() {
        let feb = Period::new(Month::February, 2026);
        let mut repo = repo_with(&[]);
        repo.create(payment("P001", "T404", feb, PaymentStatus::Paid))
            .unwrap();

        assert_eq!(repo.for_tenant("T404").len(), 1);
    }
}
