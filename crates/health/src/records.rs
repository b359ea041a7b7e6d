use std::collections::HashMap;

use chrono::{DateTime, Days, Utc};

use recordworks_core::StoreResult;
use recordworks_store::Repository;

use crate::patient::{Patient, PatientId};
use crate::prescription::{Prescription, PrescriptionId};

/// Patient and prescription stores plus a derived per-patient index.
///
/// The index is rebuilt on demand from the prescription store; it is a view,
/// not a second source of truth.
#[derive(Debug, Default)]
pub struct HealthRecords {
    patients: Repository<Patient>,
    prescriptions: Repository<Prescription>,
    by_patient: HashMap<PatientId, Vec<Prescription>>,
}

impl HealthRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the demo patients and prescriptions. `now` anchors the issue
    /// dates; pass it explicitly so tests stay deterministic.
    pub fn seed(&mut self, now: DateTime<Utc>) -> StoreResult<()> {
        self.add_patient(Patient::new(PatientId::new(1), "Alice Johnson", 30, "Female"))?;
        self.add_patient(Patient::new(PatientId::new(2), "Bob Smith", 45, "Male"))?;
        self.add_patient(Patient::new(PatientId::new(3), "Charlie Davis", 28, "Male"))?;

        let issued = |days_ago: u64| now - Days::new(days_ago);
        self.add_prescription(Prescription::new(
            PrescriptionId::new(1),
            PatientId::new(1),
            "Amoxicillin",
            issued(10),
        ))?;
        self.add_prescription(Prescription::new(
            PrescriptionId::new(2),
            PatientId::new(1),
            "Ibuprofen",
            issued(5),
        ))?;
        self.add_prescription(Prescription::new(
            PrescriptionId::new(3),
            PatientId::new(2),
            "Paracetamol",
            issued(12),
        ))?;
        self.add_prescription(Prescription::new(
            PrescriptionId::new(4),
            PatientId::new(2),
            "Lisinopril",
            issued(2),
        ))?;
        self.add_prescription(Prescription::new(
            PrescriptionId::new(5),
            PatientId::new(3),
            "Metformin",
            issued(1),
        ))?;

        Ok(())
    }

    pub fn add_patient(&mut self, patient: Patient) -> StoreResult<()> {
        self.patients.add(patient)
    }

    pub fn add_prescription(&mut self, prescription: Prescription) -> StoreResult<()> {
        self.prescriptions.add(prescription)
    }

    /// Regroup all prescriptions by patient id.
    pub fn rebuild_index(&mut self) {
        self.by_patient.clear();
        for prescription in self.prescriptions.snapshot() {
            self.by_patient
                .entry(prescription.patient_id())
                .or_default()
                .push(prescription);
        }
    }

    /// Snapshot of all patients, sorted by id.
    pub fn patients(&self) -> Vec<Patient> {
        self.patients.snapshot()
    }

    pub fn patient(&self, id: PatientId) -> StoreResult<&Patient> {
        self.patients.get(id)
    }

    /// Prescriptions for a known patient, in prescription-id order.
    ///
    /// An unknown patient id fails with `NotFound`; a known patient with no
    /// prescriptions yields an empty list.
    pub fn prescriptions_for(&self, id: PatientId) -> StoreResult<Vec<Prescription>> {
        self.patients.get(id)?;
        Ok(self.by_patient.get(&id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use recordworks_core::StoreError;

    fn test_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    fn seeded() -> HealthRecords {
        let mut records = HealthRecords::new();
        records.seed(test_now()).unwrap();
        records.rebuild_index();
        records
    }

    #[test]
    fn index_groups_prescriptions_by_patient() {
        let records = seeded();

        let for_bob = records.prescriptions_for(PatientId::new(2)).unwrap();
        assert_eq!(for_bob.len(), 2);
        let meds: Vec<&str> = for_bob.iter().map(|p| p.medication()).collect();
        assert_eq!(meds, vec!["Paracetamol", "Lisinopril"]);
    }

    #[test]
    fn unknown_patient_reports_not_found() {
        let records = seeded();
        let err = records.prescriptions_for(PatientId::new(99)).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn patient_without_prescriptions_yields_empty_list() {
        let mut records = seeded();
        records
            .add_patient(Patient::new(PatientId::new(4), "Dana Young", 52, "Female"))
            .unwrap();
        records.rebuild_index();

        assert!(records.prescriptions_for(PatientId::new(4)).unwrap().is_empty());
    }

    #[test]
    fn rebuilding_twice_does_not_duplicate() {
        let mut records = seeded();
        records.rebuild_index();

        let for_alice = records.prescriptions_for(PatientId::new(1)).unwrap();
        assert_eq!(for_alice.len(), 2);
    }

    #[test]
    fn patients_snapshot_lists_all_in_id_order() {
        let records = seeded();
        let names: Vec<String> = records.patients().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, vec!["Alice Johnson", "Bob Smith", "Charlie Davis"]);
    }
}
