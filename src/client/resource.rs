//! Fixed Pinterest resources and their convenience wrappers.
//!
//! Each [`Resource`] is a row of data (path, auth requirement, parameter shape); the wrappers
//! only forward to [`PinterestClient::resource`].

// self
use crate::{
	_prelude::*,
	client::{ApiMethod, Params, PinterestClient},
	http::ApiHttpClient,
	transport::TransportErrorMapper,
};

/// REST resources exposed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
	/// `/activity/`, public.
	Activity,
	/// `/all/`, authenticated and paged.
	All,
	/// `/popular/`, authenticated and paged.
	Popular,
	/// `/newboards/`, public.
	NewBoards,
	/// `/boards/`, public.
	Boards,
	/// `/boards/categories/`, authenticated and paged.
	Categories,
}
impl Resource {
	/// Every resource in the table.
	pub const ALL: [Resource; 6] = [
		Resource::Activity,
		Resource::All,
		Resource::Popular,
		Resource::NewBoards,
		Resource::Boards,
		Resource::Categories,
	];

	/// Path joined onto the API base URL.
	pub const fn path(self) -> &'static str {
		match self {
			Resource::Activity => "/activity/",
			Resource::All => "/all/",
			Resource::Popular => "/popular/",
			Resource::NewBoards => "/newboards/",
			Resource::Boards => "/boards/",
			Resource::Categories => "/boards/categories/",
		}
	}

	/// Whether the resource needs a user access token.
	pub const fn requires_auth(self) -> bool {
		matches!(self, Resource::All | Resource::Popular | Resource::Categories)
	}
}
impl Display for Resource {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.path())
	}
}

/// `limit`/`page` pair accepted by the paged resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Paging {
	/// Maximum number of results.
	pub limit: u32,
	/// Zero-based page index.
	pub page: u32,
}
impl Paging {
	/// Default page size.
	pub const DEFAULT_LIMIT: u32 = 36;

	/// Creates a paging pair.
	pub const fn new(limit: u32, page: u32) -> Self {
		Self { limit, page }
	}
}
impl Default for Paging {
	fn default() -> Self {
		Self::new(Self::DEFAULT_LIMIT, 0)
	}
}
impl From<Paging> for Params {
	fn from(value: Paging) -> Self {
		Params::new().with("limit", value.limit).with("page", value.page)
	}
}

impl<C, M> PinterestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Issues a `GET` against a resource from the table.
	pub async fn resource(&self, resource: Resource, params: &Params) -> Result<Value> {
		self.call(resource.path(), resource.requires_auth(), params, ApiMethod::Get).await
	}

	/// Recent public activity.
	pub async fn get_activity(&self, params: &Params) -> Result<Value> {
		self.resource(Resource::Activity, params).await
	}

	/// Feed of all pins. Requires an access token.
	pub async fn get_all(&self, paging: Paging) -> Result<Value> {
		self.resource(Resource::All, &paging.into()).await
	}

	/// Popular pins. Requires an access token.
	pub async fn get_popular(&self, paging: Paging) -> Result<Value> {
		self.resource(Resource::Popular, &paging.into()).await
	}

	/// Newly created boards.
	pub async fn get_new_boards(&self, params: &Params) -> Result<Value> {
		self.resource(Resource::NewBoards, params).await
	}

	/// Boards.
	pub async fn get_boards(&self, params: &Params) -> Result<Value> {
		self.resource(Resource::Boards, params).await
	}

	/// Board categories. Requires an access token.
	pub async fn get_categories(&self, paging: Paging) -> Result<Value> {
		self.resource(Resource::Categories, &paging.into()).await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn table_rows_match_the_api() {
		let rows = Resource::ALL
			.into_iter()
			.map(|resource| (resource.path(), resource.requires_auth()))
			.collect::<Vec<_>>();

		assert_eq!(
			rows,
			vec![
				("/activity/", false),
				("/all/", true),
				("/popular/", true),
				("/newboards/", false),
				("/boards/", false),
				("/boards/categories/", true),
			]
		);
	}

	#[test]
	fn paging_defaults_to_36_per_page_from_zero() {
		let params = Params::from(Paging::default());

		assert_eq!(params.to_form(), "limit=36&page=0");
		assert_eq!(Params::from(Paging::new(10, 2)).to_form(), "limit=10&page=2");
	}
}
