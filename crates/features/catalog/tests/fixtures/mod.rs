use canon_catalog::Catalog;
use canon_catalog::employee::EmployeeDto;
use canon_catalog::employment::EmploymentType;
use canon_catalog::role::Role;
use canon_domain::config::CatalogConfig;

pub fn catalog() -> Catalog {
    canon_catalog::init(&CatalogConfig::default()).expect("default catalog")
}

pub fn catalog_with(configure: impl FnOnce(&mut CatalogConfig)) -> Catalog {
    let mut config = CatalogConfig::default();
    configure(&mut config);
    canon_catalog::init(&config).expect("configured catalog")
}

pub fn driver() -> EmployeeDto {
    EmployeeDto { name: "Olena".to_owned(), role: Role::Driver, employment_type: EmploymentType::PartTime }
}
