use crate::modules::users::adapters::outbound::passport_info::PersonInfo;
use crate::modules::users::adapters::outbound::passport_info_in_memory::InMemoryPassportInfoProvider;
use crate::modules::users::core::user::NewUser;

pub const KNOWN_PASSPORT: &str = "1234 567890";

pub fn person(surname: &str) -> PersonInfo {
    PersonInfo {
        surname: surname.into(),
        name: "Ivan".into(),
        patronymic: "Ivanovich".into(),
        address: "Moscow, Lenina 5".into(),
    }
}

pub fn new_user(passport_number: &str) -> NewUser {
    let person = person("Ivanov");
    NewUser {
        passport_number: passport_number.into(),
        name: person.name,
        surname: person.surname,
        patronymic: person.patronymic,
        address: person.address,
    }
}

/// Passport directory that knows `KNOWN_PASSPORT` as Ivanov.
pub fn known_passports() -> InMemoryPassportInfoProvider {
    InMemoryPassportInfoProvider::with_people([(
        KNOWN_PASSPORT.parse().unwrap(),
        person("Ivanov"),
    )])
}
