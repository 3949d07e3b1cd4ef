//! Demo records for a freshly opened clinic.

use super::{Clinic, ClinicConfig, ClinicResult};
use crate::models::{Client, Pet, Veterinarian};

const SAMPLE_CLIENTS: &[(&str, &str, &str)] = &[
    ("João Silva", "11987654321", "joao.silva@example.com"),
    ("Maria Souza", "11998765432", "maria.souza@example.com"),
    ("Carlos Pereira", "11976543210", ""),
];

/// (name, species, breed, age, index into `SAMPLE_CLIENTS`)
const SAMPLE_PETS: &[(&str, &str, &str, u32, usize)] = &[
    ("Rex", "Cachorro", "Labrador", 3, 0),
    ("Miau", "Gato", "Siamês", 2, 1),
    ("Thor", "Cachorro", "Golden Retriever", 5, 2),
];

const SAMPLE_VETERINARIANS: &[(&str, &str)] = &[
    ("Dra. Ana Costa", "Clínica Geral"),
    ("Dr. Pedro Almeida", "Cardiologia"),
];

impl Clinic {
    /// Create a clinic pre-populated with three clients, one pet each and
    /// two veterinarians.
    pub fn with_sample_data(config: ClinicConfig) -> ClinicResult<Self> {
        let mut clinic = Clinic::new(config);

        let mut clients = Vec::with_capacity(SAMPLE_CLIENTS.len());
        for &(name, phone, email) in SAMPLE_CLIENTS {
            clients.push(clinic.register_client(Client::new(name, phone, email))?);
        }

        for &(name, species, breed, age, owner) in SAMPLE_PETS {
            let owner = clients[owner].clone();
            clinic.register_pet(Pet::new(name, species, breed, age, owner))?;
        }

        for &(name, license) in SAMPLE_VETERINARIANS {
            clinic.register_veterinarian(Veterinarian::new(name, license))?;
        }

        tracing::debug!(
            clients = clients.len(),
            pets = SAMPLE_PETS.len(),
            veterinarians = SAMPLE_VETERINARIANS.len(),
            "sample data loaded"
        );
        Ok(clinic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_counts() {
        let clinic = Clinic::with_sample_data(ClinicConfig::default()).unwrap();
        assert_eq!(clinic.list_clients().len(), 3);
        assert_eq!(clinic.list_pets().len(), 3);
        assert_eq!(clinic.list_veterinarians().len(), 2);
        assert!(clinic.list_appointments().is_empty());
    }

    #[test]
    fn test_sample_pets_have_owners() {
        let clinic = Clinic::with_sample_data(ClinicConfig::default()).unwrap();
        for client in clinic.list_clients() {
            assert_eq!(clinic.pets_of_client(client.id).len(), 1);
        }
        let rex = clinic.find_pet(1).unwrap();
        assert_eq!(rex.name, "Rex");
        assert_eq!(rex.owner.name, "João Silva");
    }
}
