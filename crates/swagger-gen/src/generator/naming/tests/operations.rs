use crate::generator::naming::operations::{OperationNameRegistry, OperationNamingPolicy, operation_name};

fn path_name(url: &str, method: &str) -> String {
  operation_name(url, method, None, OperationNamingPolicy::PathDerived)
}

#[test]
fn test_drops_namespace_group_and_appends_params() {
  assert_eq!(path_name("/users/{id}/orders", "GET"), "getOrdersById");
}

#[test]
fn test_single_group_is_kept() {
  assert_eq!(path_name("/pets", "post"), "postPets");
}

#[test]
fn test_root_path_is_method_only() {
  assert_eq!(path_name("/", "GET"), "get");
  assert_eq!(path_name("", "delete"), "delete");
}

#[test]
fn test_multiple_params_joined_with_and() {
  assert_eq!(path_name("/a/{x}/b/{y}", "put"), "putBByXAndY");
}

#[test]
fn test_params_only() {
  assert_eq!(path_name("/{id}", "get"), "getById");
}

#[test]
fn test_separators_become_camel_boundaries() {
  assert_eq!(path_name("/api/pet-store/{pet_id}", "get"), "getPetStoreByPetId");
}

#[test]
fn test_dots_become_camel_boundaries() {
  assert_eq!(path_name("/pets.json", "get"), "getPetsJson");
  assert_eq!(path_name("/users/{id}/orders.xml", "get"), "getOrdersXmlById");
  assert_eq!(path_name("/api/v1.0/pets", "get"), "getV10Pets");
  assert_eq!(path_name("/a/{pet.id}", "get"), "getAByPetId");
}

#[test]
fn test_digit_runs_capitalize_following_word() {
  assert_eq!(path_name("/a/user2Id", "get"), "getUser2Id");
  assert_eq!(path_name("/api/v2beta/items", "get"), "getV2BetaItems");
}

#[test]
fn test_empty_param_is_dropped() {
  assert_eq!(path_name("/pets/{}", "get"), "getPets");
}

#[test]
fn test_repeated_slashes_are_ignored() {
  assert_eq!(path_name("//pets//{id}/", "patch"), "patchPetsById");
}

#[test]
fn test_operation_id_ignored_by_default() {
  assert_eq!(
    operation_name("/pets", "get", Some("listPets"), OperationNamingPolicy::PathDerived),
    "getPets"
  );
}

#[test]
fn test_operation_id_preferred_when_requested() {
  let policy = OperationNamingPolicy::PreferOperationId;
  assert_eq!(operation_name("/pets", "get", Some("list_pets"), policy), "listPets");
  assert_eq!(operation_name("/pets", "get", Some("listPets"), policy), "listPets");
  assert_eq!(operation_name("/pets", "get", None, policy), "getPets");
  assert_eq!(operation_name("/pets", "get", Some(""), policy), "getPets");
}

#[test]
fn test_registry_suffixes_collisions() {
  let mut registry = OperationNameRegistry::new();
  assert_eq!(registry.assign("getUsers"), "getUsers");
  assert_eq!(registry.assign("getUsers"), "getUsers2");
  assert_eq!(registry.assign("getUsers"), "getUsers3");
  assert_eq!(registry.assign("postUsers"), "postUsers");
  assert_eq!(registry.assign("getUsers2"), "getUsers22");
}

#[test]
fn test_naming_is_deterministic() {
  let first = path_name("/stores/{storeId}/items/{itemId}", "GET");
  let second = path_name("/stores/{storeId}/items/{itemId}", "GET");
  assert_eq!(first, second);
  assert_eq!(first, "getItemsByStoreIdAndItemId");
}
