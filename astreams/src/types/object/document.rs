use super::OBJECT;

crate::vocab! {
	DOCUMENT = "Document" : [OBJECT];
	AUDIO = "Audio" : [DOCUMENT];
	IMAGE = "Image" : [DOCUMENT];
	PAGE = "Page" : [DOCUMENT];
	VIDEO = "Video" : [DOCUMENT];
}
