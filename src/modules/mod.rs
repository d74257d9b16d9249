pub mod display {
    pub mod board;
    pub mod sink;
}

pub mod export {
    pub mod clipboard;
    pub mod download;
}

pub mod script {
    pub mod generator;
    pub mod nodes;
    pub mod serializer;
}

pub mod session {
    pub mod module;
}
