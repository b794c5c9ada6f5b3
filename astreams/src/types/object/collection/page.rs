use crate::{types::property, Collection, OrderedCollection};

use super::{COLLECTION, ORDERED_COLLECTION};

crate::vocab! {
	COLLECTION_PAGE = "CollectionPage" : [COLLECTION] { PART_OF, NEXT, PREV };
	ORDERED_COLLECTION_PAGE = "OrderedCollectionPage" : [ORDERED_COLLECTION, COLLECTION_PAGE] { START_INDEX };
}

pub trait CollectionPage : Collection {
	crate::property!(part_of -> single property::PART_OF);
	crate::property!(next -> single property::NEXT);
	crate::property!(prev -> single property::PREV);
}

impl CollectionPage for crate::Entity {}

pub trait OrderedCollectionPage : OrderedCollection + CollectionPage {
	crate::property!(
		/// relative index of the first item of this page within the whole collection
		start_index -> single property::START_INDEX
	);
}

impl OrderedCollectionPage for crate::Entity {}
