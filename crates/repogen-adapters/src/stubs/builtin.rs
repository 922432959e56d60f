//! The stub texts that ship with repogen.
//!
//! Placeholders use the `Dummy*` spelling declared by
//! [`repogen_core::domain::Token`]; the `stub_for` lookup is the single
//! source of truth mapping kinds to texts.

use repogen_core::domain::TemplateKind;

pub(crate) const BASE_INTERFACE: &str = r#"<?php

namespace DummyNamespace;

interface RepositoryInterface
{
    public function all(array $columns = ['*']);

    public function find($id);

    public function create(array $attributes);

    public function update($id, array $attributes);

    public function delete($id);
}
"#;

pub(crate) const BASE_REPOSITORY: &str = r#"<?php

namespace DummyNamespace;

use Illuminate\Database\Eloquent\Model;

class BaseRepository implements RepositoryInterface
{
    /**
     * @var Model
     */
    protected $model;

    public function __construct(Model $model)
    {
        $this->model = $model;
    }

    public function all(array $columns = ['*'])
    {
        return $this->model->all($columns);
    }

    public function find($id)
    {
        return $this->model->findOrFail($id);
    }

    public function create(array $attributes)
    {
        return $this->model->create($attributes);
    }

    public function update($id, array $attributes)
    {
        $record = $this->find($id);
        $record->update($attributes);

        return $record;
    }

    public function delete($id)
    {
        return $this->find($id)->delete();
    }
}
"#;

pub(crate) const ITEM_REPOSITORY_INTERFACE: &str = r#"<?php

namespace DummyNamespace;

interface DummyClass extends \DummyParent
{
}
"#;

pub(crate) const ITEM_REPOSITORY: &str = r#"<?php

namespace DummyNamespace;

class DummyClass extends \DummyParent implements DummyInterface
{
    public function __construct(\DummyModel $model)
    {
        parent::__construct($model);
    }
}
"#;

pub(crate) const CONFIG_MAPPING: &str = r#"<?php

/*
|--------------------------------------------------------------------------
| Repository Bindings
|--------------------------------------------------------------------------
|
| Generated by repogen. Each entry binds a repository interface to the
| implementation the container should resolve it to. Re-running the
| generator rewrites this file, so treat manual edits as temporary.
|
*/

return [
DummyList
];
"#;

/// Stub text for one template kind.
pub(crate) const fn stub_for(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::BaseRepository => BASE_REPOSITORY,
        TemplateKind::BaseInterface => BASE_INTERFACE,
        TemplateKind::ItemRepository => ITEM_REPOSITORY,
        TemplateKind::ItemRepositoryInterface => ITEM_REPOSITORY_INTERFACE,
        TemplateKind::ConfigMapping => CONFIG_MAPPING,
    }
}
