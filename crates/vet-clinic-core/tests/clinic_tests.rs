//! Clinic facade integration tests.

use chrono::{NaiveDate, NaiveDateTime};
use vet_clinic_core::{
    Client, Clinic, ClinicConfig, ClinicError, EntityKind, Medication, Pet, Veterinarian,
};

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2031, 9, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn make_clinic() -> Clinic {
    Clinic::new(ClinicConfig::default())
}

#[test]
fn test_remove_client_without_pets() {
    let mut clinic = make_clinic();
    let a = clinic.register_client(Client::new("A", "1111", "")).unwrap();

    clinic.remove_client(&a).unwrap();
    assert!(clinic.list_clients().iter().all(|c| c.id != a.id));
}

#[test]
fn test_remove_client_with_pet_fails() {
    let mut clinic = make_clinic();
    let b = clinic.register_client(Client::new("B", "2222", "")).unwrap();
    let p = clinic
        .register_pet(Pet::new("P", "Gato", "SRD", 1, b.clone()))
        .unwrap();

    let err = clinic.remove_client(&b).unwrap_err();
    assert!(matches!(err, ClinicError::ReferentialConflict(_)));

    let clients = clinic.list_clients();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0], b);
    assert_eq!(clinic.list_pets(), vec![p]);
}

#[test]
fn test_registered_records_round_trip() {
    let mut clinic = make_clinic();
    let client = clinic
        .register_client(Client::new("João Silva", "11987654321", "joao@example.com"))
        .unwrap();
    let pet = clinic
        .register_pet(Pet::new("Rex", "Cachorro", "Labrador", 3, client.clone()))
        .unwrap();
    let vet = clinic
        .register_veterinarian(Veterinarian::new("Dr. Pedro Almeida", "CRMV-SP 12345"))
        .unwrap();

    assert_eq!(clinic.find_client(client.id), Some(client));
    assert_eq!(clinic.find_pet(pet.id), Some(pet));
    assert_eq!(clinic.find_veterinarian(vet.id), Some(vet));
}

#[test]
fn test_listing_is_isolated_from_caller_mutation() {
    let mut clinic = make_clinic();
    clinic.register_client(Client::new("Ana", "1", "")).unwrap();

    let mut clients = clinic.list_clients();
    clients[0].name = "Mutated".into();
    clients.push(Client::new("Extra", "2", ""));

    let fresh = clinic.list_clients();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].name, "Ana");
}

#[test]
fn test_appointment_lifecycle() {
    let mut clinic = make_clinic();
    let client = clinic.register_client(Client::new("Carlos", "3", "")).unwrap();
    let pet = clinic
        .register_pet(Pet::new("Thor", "Cachorro", "Golden Retriever", 5, client.clone()))
        .unwrap();
    let vet = clinic
        .register_veterinarian(Veterinarian::new("Dra. Ana Costa", "Clínica Geral"))
        .unwrap();

    let checkup = clinic
        .schedule_appointment(&pet, &client, &vet, at(1, 9, 0))
        .unwrap();
    let vaccine = clinic
        .schedule_appointment(&pet, &client, &vet, at(2, 9, 0))
        .unwrap();
    assert_eq!(clinic.list_appointments().len(), 2);

    // Scheduled -> Completed
    let prescription = clinic
        .complete_appointment(
            &checkup,
            "Saudável",
            vec![Medication::new("Vermífugo", "1 comprimido")],
        )
        .unwrap();
    assert_eq!(prescription.diagnosis_description(), Some("Saudável"));
    assert_eq!(prescription.medications[0].name, "Vermífugo");

    // Scheduled -> Cancelled
    clinic.remove_appointment(&vaccine).unwrap();
    assert!(clinic.list_appointments().is_empty());

    // Terminal states do not transition again
    assert_eq!(
        clinic.remove_appointment(&vaccine),
        Err(ClinicError::NotFound {
            kind: EntityKind::Appointment,
            id: vaccine.id
        })
    );
    assert!(clinic
        .complete_appointment(&checkup, "again", Vec::new())
        .is_err());
}

#[test]
fn test_overlapping_appointments_for_same_vet_both_succeed() {
    let mut clinic = make_clinic();
    let client = clinic.register_client(Client::new("Maria", "4", "")).unwrap();
    let miau = clinic
        .register_pet(Pet::new("Miau", "Gato", "Siamês", 2, client.clone()))
        .unwrap();
    let rex = clinic
        .register_pet(Pet::new("Rex", "Cachorro", "Labrador", 3, client.clone()))
        .unwrap();
    let vet = clinic
        .register_veterinarian(Veterinarian::new("Dra. Ana Costa", "Clínica Geral"))
        .unwrap();

    let first = clinic.schedule_appointment(&miau, &client, &vet, at(10, 14, 0));
    let second = clinic.schedule_appointment(&rex, &client, &vet, at(10, 14, 15));

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_eq!(clinic.appointments_for_veterinarian(vet.id).len(), 2);
}

#[test]
fn test_separate_clinics_have_separate_sequences() {
    let mut first = make_clinic();
    let mut second = make_clinic();

    first.register_client(Client::new("A", "1", "")).unwrap();
    first.register_client(Client::new("B", "2", "")).unwrap();
    let c = second.register_client(Client::new("C", "3", "")).unwrap();

    assert_eq!(c.id, 1);
}
