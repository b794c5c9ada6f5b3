pub mod page;

use crate::{types::property, Object};

use super::OBJECT;

crate::vocab! {
	COLLECTION = "Collection" : [OBJECT] { TOTAL_ITEMS, CURRENT, FIRST, LAST, ITEMS };
	ORDERED_COLLECTION = "OrderedCollection" : [COLLECTION] { ORDERED_ITEMS };
}

pub trait Collection : Object {
	crate::property!(
		/// A non-negative integer specifying the total number of objects contained by the logical
		/// view of the collection. It might not reflect the items actually serialized.
		total_items -> single property::TOTAL_ITEMS
	);
	crate::property!(
		/// In a paged collection, the page holding the most recently updated member items.
		current -> single property::CURRENT
	);
	crate::property!(
		/// In a paged collection, the furthest preceding page.
		first -> single property::FIRST
	);
	crate::property!(
		/// In a paged collection, the furthest proceeding page.
		last -> single property::LAST
	);
	crate::property!(
		/// Items contained in the collection, ordered or not.
		items -> values property::ITEMS
	);
}

impl Collection for crate::Entity {}

pub trait OrderedCollection : Collection {
	crate::property!(
		/// Same as `items`, but the order is meaningful.
		ordered_items -> values property::ORDERED_ITEMS
	);
}

impl OrderedCollection for crate::Entity {}
