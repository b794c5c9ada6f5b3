#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident $(= $rename:literal)?),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl $enum_name {
				pub fn as_str(&self) -> &'static str {
					match self {
						$(Self::$flat => $crate::macros::strenum_name!($flat $(, $rename)?),)*
						$(Self::$deep(x) => x.as_str(),)*
					}
				}
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					self.as_str()
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_str())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value: &str) -> Result<Self, Self::Error> {
					$(
						if value == $crate::macros::strenum_name!($flat $(, $rename)?) {
							return Ok(Self::$flat);
						}
					)*
					$(
						if let Ok(x) = $inner::try_from(value) {
							return Ok(Self::$deep(x));
						}
					)*
					Err($crate::macros::TypeValueError)
				}
			}
		)*
	};
}

pub(crate) use strenum;

macro_rules! strenum_name {
	($flat:ident) => { stringify!($flat) };
	($flat:ident, $rename:literal) => { $rename };
}

pub(crate) use strenum_name;

/// Generates the read and write accessors of one vocabulary property inside an accessor trait.
/// Every accessor goes through [`crate::Base::entity`], so implementors only provide that.
macro_rules! property {
	($(#[$meta:meta])* $name:ident -> values $spec:path) => {
		paste::item! {
			$(#[$meta])*
			fn $name(&self) -> $crate::Values<'_> {
				self.entity().values(&$spec)
			}

			fn [< $name _mut >](&mut self) -> $crate::ValuesMut<'_> {
				self.entity_mut().values_mut(&$spec)
			}
		}
	};

	($(#[$meta:meta])* $name:ident -> single $spec:path) => {
		paste::item! {
			$(#[$meta])*
			fn $name(&self) -> $crate::Single<'_> {
				self.entity().single(&$spec)
			}

			fn [< $name _mut >](&mut self) -> $crate::SingleMut<'_> {
				self.entity_mut().single_mut(&$spec)
			}
		}
	};

	($(#[$meta:meta])* $name:ident -> lang $spec:path) => {
		paste::item! {
			$(#[$meta])*
			fn $name(&self) -> Option<&$crate::LangMap> {
				self.entity().lang_map(&$spec)
			}

			fn [< $name _mut >](&mut self) -> $crate::VocabResult<&mut $crate::LangMap> {
				self.entity_mut().lang_map_mut(&$spec)
			}
		}
	};
}

pub(crate) use property;

/// Declares vocabulary types as static schemas: name, parents, own properties (by their name in
/// [`crate::types::property`]) and inherited properties the type drops.
macro_rules! vocab {
	($(
		$(#[$meta:meta])*
		$ident:ident = $name:literal : [$($parent:ident),*]
			$({ $($(#[$pmeta:meta])* $property:ident),* $(,)? })?
			$(without [$($without:literal),*])?;
	)*) => {
		$(
			$(#[$meta])*
			pub static $ident: $crate::schema::TypeSchema = $crate::schema::TypeSchema {
				name: $name,
				extends: &[$(&$parent),*],
				properties: &[$($($(#[$pmeta])* &$crate::types::property::$property),*)?],
				without: &[$($($without),*)?],
			};
		)*
	};
}

pub(crate) use vocab;
